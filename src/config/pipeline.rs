//! Pipeline configuration
//!
//! Everything here is fixed at compile time. Tests construct their own
//! `PipelineConfig` instead of editing these constants.

use crate::domain::Frequency;

/// The Master Pipeline Configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the input CSV file
    pub csv_path: &'static str,
    /// Column holding 8-digit `YYYYMMDD` dates
    pub date_column: &'static str,
    /// Column holding values in tenths of a unit (KNMI exports temperatures
    /// as 0.1 degrees Celsius)
    pub value_column: &'static str,
    /// Number of future periods to forecast
    pub periods: usize,
    /// Spacing of the future periods
    pub frequency: Frequency,
}

pub const PIPELINE: PipelineConfig = PipelineConfig {
    csv_path: "dataset/dutch-weather/input.csv",
    date_column: "YYYYMMDD",
    value_column: "TX",
    periods: 24,
    frequency: Frequency::Monthly,
};

/// How many rows head/tail previews print
pub const PREVIEW_ROWS: usize = 5;
