//! Series synthesis blueprints (seed values, drift, noise and clamp bounds).

/// Random-walk parameters for one trend.
///
/// Each historical step applies
/// `value + direction * (drift_offset + r * drift_span) + noise`,
/// where `noise = r * noise_span - noise_span / 2`, then clamps to `[floor, ceiling]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Running value before the first step.
    pub seed: f64,
    /// +1.0 pushes the walk up, -1.0 pushes it down, 0.0 disables drift.
    pub direction: f64,
    /// Minimum drift magnitude per step.
    pub drift_offset: f64,
    /// Width of the random part of the drift.
    pub drift_span: f64,
    /// Full width of the symmetric noise term.
    pub noise_span: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl WalkParams {
    /// True when this walk draws a drift sample in addition to noise.
    #[inline]
    pub fn has_drift(&self) -> bool {
        self.direction != 0.0
    }
}

/// Forward extrapolation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastParams {
    /// Jitter is `round(r * jitter_span)`.
    pub jitter_span: f64,
    /// Deterministic linear drift per forecast day.
    pub drift_per_day: f64,
    pub ceiling: f64,
}

pub struct ForecastConfig {
    pub upward: WalkParams,
    pub downward: WalkParams,
    pub stable: WalkParams,
    pub forecast: ForecastParams,
    /// Absolute bounds of any stored engagement value.
    pub value_min: f64,
    pub value_max: f64,
}

pub static FORECAST: ForecastConfig = ForecastConfig {
    upward: WalkParams {
        seed: 30.0,
        direction: 1.0,
        drift_offset: 1.0,
        drift_span: 5.0,
        noise_span: 10.0,
        // No floor in the walk itself beyond the engagement domain.
        floor: 0.0,
        ceiling: 95.0,
    },
    downward: WalkParams {
        seed: 80.0,
        direction: -1.0,
        drift_offset: 1.0,
        drift_span: 5.0,
        noise_span: 10.0,
        floor: 15.0,
        ceiling: 100.0,
    },
    stable: WalkParams {
        seed: 50.0,
        direction: 0.0,
        drift_offset: 0.0,
        drift_span: 0.0,
        noise_span: 10.0,
        floor: 15.0,
        ceiling: 85.0,
    },
    forecast: ForecastParams {
        jitter_span: 4.0,
        drift_per_day: 0.5,
        ceiling: 100.0,
    },
    value_min: 0.0,
    value_max: 100.0,
};
