#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
pub mod pipeline;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::{PIPELINE, PipelineConfig};
pub use domain::{ForecastTable, Frequency, ObservationSeries};
pub use forecast::{AdditiveModel, Forecaster};
pub use pipeline::{PipelineError, PipelineOutcome};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the interactive figure window (previews are still printed)
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    _cc: &eframe::CreationContext,
    outcome: PipelineOutcome,
) -> Box<dyn eframe::App> {
    let app = ui::ForecastApp::new(outcome);
    Box::new(app)
}
