// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (binaries and tests/)
pub use analysis::{RandomSource, ScriptedRandom};
pub use config::PERSISTENCE;
pub use domain::{Horizon, Timeframe, Trend, select_timeframe};
pub use engine::ForecastEngine;
pub use models::{Engagement, Series, SeriesPoint};
pub use ui::ForecastApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start on this timeframe instead of the last one used
    #[arg(long, value_enum)]
    pub timeframe: Option<Timeframe>,

    /// Start on this trend instead of the last one used
    #[arg(long, value_enum)]
    pub trend: Option<Trend>,

    /// Seed the random walk for a reproducible chart
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> ForecastApp {
    ForecastApp::new(cc, args)
}
