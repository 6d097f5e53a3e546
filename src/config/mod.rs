//! Configuration module for the engagement forecast.

// Can all be private now because we have a public re-export.
mod debug;
mod forecast;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LOG_PERFORMANCE};
pub use forecast::{FORECAST, ForecastConfig, ForecastParams, WalkParams};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
