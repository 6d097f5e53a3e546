// Series synthesis
pub mod random;
pub mod series_generator;

pub use random::{RandomSource, ScriptedRandom};
pub use series_generator::{
    extend_with_forecast, forecast_points, generate, generate_history, step_walk,
};
