pub mod forecast_table;
pub mod frequency;
pub mod observation;

// Re-export key types
pub use forecast_table::ForecastTable;
pub use frequency::Frequency;
pub use observation::ObservationSeries;
