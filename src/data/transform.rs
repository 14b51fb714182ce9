//! Raw-row to observation-series transformation.
//!
//! Pure and deterministic: the same raw rows always produce the same series.
//! Dates come in as 8-digit `YYYYMMDD` fields; values are stored in tenths of
//! a unit and are divided by 10 here.

use crate::data::csv_file::RawRow;
use crate::domain::ObservationSeries;
use crate::pipeline::PipelineError;
use crate::utils::TimeUtils;

/// Scale factor between raw column units and whole units
const TENTHS_PER_UNIT: f64 = 10.0;

pub fn to_observations(rows: &[RawRow]) -> Result<ObservationSeries, PipelineError> {
    let mut timestamps = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());

    for row in rows {
        let timestamp =
            TimeUtils::parse_compact_date(&row.date).map_err(|_| PipelineError::MalformedDate {
                line: row.line,
                value: row.date.clone(),
            })?;

        let raw_value: f64 = row.value.parse().map_err(|_| {
            PipelineError::Load(format!(
                "malformed numeric value '{}' at line {}",
                row.value, row.line
            ))
        })?;

        timestamps.push(timestamp);
        values.push(raw_value / TENTHS_PER_UNIT);
    }

    Ok(ObservationSeries::new(timestamps, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: usize, date: &str, value: &str) -> RawRow {
        RawRow {
            line,
            date: date.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_values_divided_by_ten() {
        let rows = vec![raw(2, "20060701", "210"), raw(3, "20060702", "205")];
        let series = to_observations(&rows).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.values, vec![21.0, 20.5]);
        assert_eq!(
            TimeUtils::to_display_date(series.timestamps[0]),
            "2006-07-01"
        );
        assert_eq!(
            TimeUtils::to_display_date(series.timestamps[1]),
            "2006-07-02"
        );
    }

    #[test]
    fn test_round_trip_recovers_raw_tenths() {
        let raw_tenths = [210_i64, 205, -33, 0, 417];
        let rows: Vec<RawRow> = raw_tenths
            .iter()
            .enumerate()
            .map(|(i, v)| raw(i + 2, "20060701", &v.to_string()))
            .collect();

        let series = to_observations(&rows).unwrap();
        for (value, original) in series.values.iter().zip(raw_tenths) {
            assert_eq!((value * 10.0).round() as i64, original);
        }
    }

    #[test]
    fn test_malformed_date_names_the_row() {
        let rows = vec![raw(2, "20060701", "210"), raw(3, "2006-07-02", "205")];
        let err = to_observations(&rows).unwrap_err();
        match err {
            PipelineError::MalformedDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "2006-07-02");
            }
            other => panic!("expected MalformedDate, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_value_is_a_load_error() {
        let rows = vec![raw(2, "20060701", "warm")];
        assert!(matches!(
            to_observations(&rows),
            Err(PipelineError::Load(_))
        ));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let rows = vec![raw(2, "20060701", "210"), raw(3, "20060702", "205")];
        let first = to_observations(&rows).unwrap();
        let second = to_observations(&rows).unwrap();
        assert_eq!(first, second);
    }
}
