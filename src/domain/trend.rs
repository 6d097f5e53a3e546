use {
    crate::config::{FORECAST, WalkParams},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Bias applied to the random walk that synthesizes the historical series.
///
/// The dashboard card only ever asks for `Upward`; the other two walks are
/// kept selectable from the CLI and the viewer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    #[default]
    #[strum(to_string = "Upward")]
    Upward,
    #[strum(to_string = "Downward")]
    Downward,
    #[strum(to_string = "Stable")]
    Stable,
}

impl Trend {
    pub fn walk(self) -> &'static WalkParams {
        match self {
            Self::Upward => &FORECAST.upward,
            Self::Downward => &FORECAST.downward,
            Self::Stable => &FORECAST.stable,
        }
    }

    /// Starting value of the walk (30 / 80 / 50).
    #[inline]
    pub fn seed_value(self) -> f64 {
        self.walk().seed
    }
}
