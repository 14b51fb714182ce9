//! The five-stage pipeline: load, transform, fit, extend, predict.
//!
//! Strictly sequential with fail-fast short-circuiting. Each stage converts
//! its collaborator's failure into a `PipelineError` variant; the caller
//! prints it and stops. Plotting happens after `run` returns, in the UI.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;
use crate::data;
use crate::domain::{ForecastTable, ObservationSeries};
use crate::forecast::{AdditiveModel, Forecaster};
use crate::report;

/// One variant per failure kind. All are terminal; nothing retries.
#[derive(Debug, Clone)]
pub enum PipelineError {
    /// Input path does not resolve
    MissingFile(PathBuf),
    /// Configured date or value column absent after load
    MissingColumn(String),
    /// A date field did not match the 8-digit calendar format
    MalformedDate { line: usize, value: String },
    /// Any other load/transform failure
    Load(String),
    /// Forecaster rejected the observation series
    Fit(String),
    /// Timeline extension or prediction failed
    Predict(String),
    /// Rendering failed (reported, but the run still finishes)
    Plot(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::MissingFile(path) => {
                write!(f, "Error: The file '{}' was not found.", path.display())
            }
            PipelineError::MissingColumn(column) => write!(
                f,
                "Error: Column '{}' not found in the CSV. Please check the configured date/value columns.",
                column
            ),
            PipelineError::MalformedDate { line, value } => write!(
                f,
                "Error: Malformed date '{}' at line {} (expected YYYYMMDD).",
                value, line
            ),
            PipelineError::Load(msg) => {
                write!(f, "An error occurred during data loading: {}", msg)
            }
            PipelineError::Fit(msg) => {
                write!(f, "An error occurred during model fitting: {}", msg)
            }
            PipelineError::Predict(msg) => {
                write!(f, "An error occurred during prediction: {}", msg)
            }
            PipelineError::Plot(msg) => {
                write!(f, "An error occurred during plotting: {}", msg)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Everything a successful run produces, handed to the UI for plotting.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub observations: ObservationSeries,
    pub forecast: ForecastTable,
    pub model: AdditiveModel,
    /// Name of the forecast quantity, used for figure titles and axes
    pub value_label: String,
}

pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome, PipelineError> {
    // Stage 1+2: load and transform
    let raw_rows = data::load_raw_rows(
        Path::new(config.csv_path),
        config.date_column,
        config.value_column,
    )?;
    let observations = data::to_observations(&raw_rows)?;

    println!("Data loaded and prepared successfully.");
    report::preview_observations_head(&observations);

    // Stage 3: fit
    let mut model = AdditiveModel::new();
    model
        .fit(&observations)
        .map_err(|e| PipelineError::Fit(e.to_string()))?;
    println!("\nModel fitted successfully.");

    // Stage 4: extend the timeline
    let timeline = model
        .extend_timeline(config.periods, config.frequency)
        .map_err(|e| PipelineError::Predict(e.to_string()))?;
    println!(
        "\nFuture timeline created for {} {} periods:",
        config.periods, config.frequency
    );
    report::preview_timeline_tail(&timeline);

    // Stage 5: predict
    let forecast = model
        .predict(&timeline)
        .map_err(|e| PipelineError::Predict(e.to_string()))?;
    println!("\nForecast generated successfully.");
    report::preview_forecast_tail(&forecast);

    Ok(PipelineOutcome {
        observations,
        forecast,
        model,
        value_label: config.value_column.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Frequency;
    use crate::utils::TimeUtils;
    use std::path::{Path, PathBuf};

    /// Write a CSV into a unique temp file and return its path.
    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("temp-horizon-test-{}", name));
        std::fs::write(&path, contents).expect("failed to write test CSV");
        path
    }

    fn config_for(path: &Path) -> PipelineConfig {
        // Leak the path string: PipelineConfig mirrors the compile-time
        // constant layout, and test configs live for the whole test anyway.
        PipelineConfig {
            csv_path: Box::leak(path.display().to_string().into_boxed_str()),
            date_column: "YYYYMMDD",
            value_column: "TX",
            periods: 24,
            frequency: Frequency::Monthly,
        }
    }

    #[test]
    fn test_missing_file_halts_at_loader() {
        let config = PipelineConfig {
            csv_path: "does/not/exist.csv",
            date_column: "YYYYMMDD",
            value_column: "TX",
            periods: 24,
            frequency: Frequency::Monthly,
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFile(_)));
    }

    #[test]
    fn test_missing_value_column_halts_before_forecaster() {
        let path = write_temp_csv(
            "missing-column.csv",
            "YYYYMMDD,TN\n20060701,150\n20060702,148\n",
        );
        let err = run(&config_for(&path)).unwrap_err();
        match err {
            PipelineError::MissingColumn(column) => assert_eq!(column, "TX"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_end_to_end_two_row_scenario() {
        let path = write_temp_csv(
            "end-to-end.csv",
            "STN,YYYYMMDD,TX,TN\n260,20060701,210,150\n260,20060702,205,148\n",
        );
        let outcome = run(&config_for(&path)).expect("pipeline should succeed");

        // Extra CSV columns are gone; values are rescaled to whole units
        assert_eq!(outcome.observations.values, vec![21.0, 20.5]);
        assert_eq!(
            TimeUtils::to_compact_date(outcome.observations.timestamps[0]),
            "20060701"
        );

        // History (2 rows) plus 24 monthly stamps, all strictly after the
        // last observation, starting at the July 2006 month-end
        assert_eq!(outcome.forecast.len(), 2 + 24);
        let last_observed = outcome.observations.last_timestamp().unwrap();
        let future = &outcome.forecast.timestamps[2..];
        assert!(future.iter().all(|&t| t > last_observed));
        assert_eq!(TimeUtils::to_display_date(future[0]), "2006-07-31");
    }

    #[test]
    fn test_load_transform_is_idempotent() {
        let path = write_temp_csv(
            "idempotent.csv",
            "YYYYMMDD,TX\n20060701,210\n20060702,205\n20060703,198\n",
        );
        let config = config_for(&path);

        let first = data::load_raw_rows(
            Path::new(config.csv_path),
            config.date_column,
            config.value_column,
        )
        .and_then(|rows| data::to_observations(&rows))
        .unwrap();
        let second = data::load_raw_rows(
            Path::new(config.csv_path),
            config.date_column,
            config.value_column,
        )
        .and_then(|rows| data::to_observations(&rows))
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_too_few_rows_is_a_fit_error() {
        let path = write_temp_csv("one-row.csv", "YYYYMMDD,TX\n20060701,210\n");
        let err = run(&config_for(&path)).unwrap_err();
        assert!(matches!(err, PipelineError::Fit(_)));
    }

    #[test]
    fn test_error_messages_name_their_kind() {
        let missing = PipelineError::MissingFile(PathBuf::from("input.csv"));
        assert!(missing.to_string().contains("was not found"));

        let column = PipelineError::MissingColumn("TX".to_string());
        assert!(column.to_string().contains("Column 'TX'"));

        let date = PipelineError::MalformedDate {
            line: 3,
            value: "2006-07-01".to_string(),
        };
        assert!(date.to_string().contains("line 3"));
        assert!(date.to_string().contains("YYYYMMDD"));
    }
}
