// Domain types and value objects
mod timeframe;
mod trend;

// Re-export commonly used types to the world
pub use timeframe::{Horizon, Timeframe, select_timeframe};
pub use trend::Trend;
