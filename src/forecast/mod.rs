//! The forecasting collaborator, kept behind a narrow interface so the
//! concrete model is swappable without touching the pipeline.

pub mod additive;

pub use additive::AdditiveModel;

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::domain::{ForecastTable, Frequency, ObservationSeries};

pub trait Forecaster {
    /// Train on the observation series. Rejects series the model cannot
    /// represent (too few rows, non-monotonic timestamps, non-finite values).
    fn fit(&mut self, observations: &ObservationSeries) -> Result<()>;

    /// Build the prediction timeline: the fitted history followed by
    /// `periods` timestamps strictly after the last observed one.
    fn extend_timeline(
        &self,
        periods: usize,
        frequency: Frequency,
    ) -> Result<Vec<NaiveDateTime>>;

    /// Point forecasts with uncertainty bounds over the given timeline.
    fn predict(&self, timeline: &[NaiveDateTime]) -> Result<ForecastTable>;
}
