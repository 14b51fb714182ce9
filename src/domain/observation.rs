use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// ObservationSeries: the cleaned two-column (timestamp, value) series
// ============================================================================

/// The observation table handed to the forecaster. Exactly two columns,
/// whatever the raw CSV carried. Values are already rescaled to whole units.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ObservationSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl ObservationSeries {
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Self {
        debug_assert_eq!(timestamps.len(), values.len());
        Self { timestamps, values }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }

    /// Timestamps must be strictly increasing for the forecaster to accept
    /// the series. Duplicates and backwards jumps both fail this.
    pub fn is_strictly_increasing(&self) -> bool {
        self.timestamps.windows(2).all(|w| w[0] < w[1])
    }
}
