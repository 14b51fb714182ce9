//! Configuration module for the forecasting application.

pub mod pipeline;
pub mod plot;

// Re-export commonly used items
pub use pipeline::{PIPELINE, PipelineConfig};
pub use plot::PLOT_CONFIG;
