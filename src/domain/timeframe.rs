use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// UI-selected window controlling how many historical and forecast days are generated.
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
pub enum Timeframe {
    #[default]
    #[strum(to_string = "Week")]
    Week,
    #[strum(to_string = "Month")]
    Month,
    #[strum(to_string = "Quarter")]
    Quarter,
}

/// Number of historical days and forecast days for a timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub history_days: usize,
    pub forecast_days: usize,
}

impl Horizon {
    #[inline]
    pub fn total_days(&self) -> usize {
        self.history_days + self.forecast_days
    }
}

impl Timeframe {
    pub const fn horizon(self) -> Horizon {
        match self {
            Self::Week => Horizon {
                history_days: 7,
                forecast_days: 3,
            },
            Self::Month => Horizon {
                history_days: 30,
                forecast_days: 10,
            },
            Self::Quarter => Horizon {
                history_days: 90,
                forecast_days: 30,
            },
        }
    }
}

/// Lookup as a plain tuple: `(history_days, forecast_days)`.
pub fn select_timeframe(timeframe: Timeframe) -> (usize, usize) {
    let h = timeframe.horizon();
    (h.history_days, h.forecast_days)
}
