use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// ForecastTable: the forecaster's output over the extended timeline
// ============================================================================

/// Point forecasts with uncertainty bounds, one row per timeline timestamp.
/// The trend column feeds the decomposition figure.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ForecastTable {
    pub timestamps: Vec<NaiveDateTime>,

    /// Point estimate
    pub yhat: Vec<f64>,
    /// Lower uncertainty bound
    pub yhat_lower: Vec<f64>,
    /// Upper uncertainty bound
    pub yhat_upper: Vec<f64>,

    /// Fitted trend component at each timestamp
    pub trend: Vec<f64>,
}

impl ForecastTable {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Single row as (timestamp, yhat, lower, upper).
    pub fn row(&self, idx: usize) -> (NaiveDateTime, f64, f64, f64) {
        (
            self.timestamps[idx],
            self.yhat[idx],
            self.yhat_lower[idx],
            self.yhat_upper[idx],
        )
    }
}
