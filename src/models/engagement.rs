use serde::{Deserialize, Serialize};

use crate::config::FORECAST;
use crate::utils::{clamp_to, round_half_up};

/// Engagement percentage, always a whole number in `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Engagement(u8);

impl Engagement {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamps to `0..=100`.
    pub const fn new(val: u8) -> Self {
        if val > 100 {
            Self(100)
        } else {
            Self(val)
        }
    }

    /// Rounds half-up, then clamps to the engagement domain. NaN maps to 0.
    pub fn from_f64(val: f64) -> Self {
        if val.is_nan() {
            return Self::MIN;
        }
        let v = clamp_to(round_half_up(val), FORECAST.value_min, FORECAST.value_max);
        Self(v as u8)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl std::fmt::Display for Engagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
