mod engagement;
mod series;

pub use engagement::Engagement;
pub use series::{Series, SeriesPoint};
