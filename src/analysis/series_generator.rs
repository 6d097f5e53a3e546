//! Synthetic engagement series: a biased random walk for history, then a
//! linear-drift extrapolation for the forecast.

use chrono::NaiveDate;

use crate::analysis::RandomSource;
use crate::config::{DF, FORECAST, WalkParams};
use crate::domain::{Timeframe, Trend};
use crate::models::{Engagement, Series, SeriesPoint};
use crate::utils::{clamp_to, offset_days, round_half_up};

/// Advances the walk by one day and returns the new unrounded value.
///
/// Noise is drawn before drift; scripted sources rely on that order.
pub fn step_walk<R: RandomSource + ?Sized>(walk: &WalkParams, value: f64, rng: &mut R) -> f64 {
    let noise = rng.next_unit() * walk.noise_span - walk.noise_span / 2.0;
    let drift = if walk.has_drift() {
        walk.direction * (rng.next_unit() * walk.drift_span + walk.drift_offset)
    } else {
        0.0
    };
    clamp_to(value + drift + noise, walk.floor, walk.ceiling)
}

/// `days` historical points ending on `today`, oldest first.
///
/// The running value stays unrounded between steps; only the stored point is rounded.
pub fn generate_history<R: RandomSource + ?Sized>(
    trend: Trend,
    days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SeriesPoint> {
    let walk = trend.walk();
    let mut value = walk.seed;
    let mut points = Vec::with_capacity(days);

    for i in 0..days {
        let day = offset_days(today, -((days - i - 1) as i64));
        value = step_walk(walk, value, rng);
        if DF.log_walk_steps {
            log::debug!("{} walk step {}/{}: {:.3}", trend, i + 1, days, value);
        }
        points.push(SeriesPoint::historical(day, Engagement::from_f64(value)));
    }
    points
}

/// `forecast_days` points starting tomorrow, extrapolated from `last_value`.
///
/// Day `i` is `min(100, last + round(r * 4) + i * 0.5)`, rounded.
pub fn forecast_points<R: RandomSource + ?Sized>(
    last_value: Engagement,
    forecast_days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SeriesPoint> {
    let params = &FORECAST.forecast;
    let base = last_value.as_f64();

    (1..=forecast_days)
        .map(|i| {
            let jitter = round_half_up(rng.next_unit() * params.jitter_span);
            let raw = (base + jitter + i as f64 * params.drift_per_day).min(params.ceiling);
            SeriesPoint::forecast(offset_days(today, i as i64), Engagement::from_f64(raw))
        })
        .collect()
}

/// Appends `forecast_days` forecast points to `history`.
pub fn extend_with_forecast<R: RandomSource + ?Sized>(
    mut history: Vec<SeriesPoint>,
    last_value: Engagement,
    forecast_days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SeriesPoint> {
    history.reserve(forecast_days);
    history.extend(forecast_points(last_value, forecast_days, today, rng));
    history
}

/// Full chart series for a trend and timeframe.
///
/// An empty history seeds the forecast from the trend's starting value.
pub fn generate<R: RandomSource + ?Sized>(
    trend: Trend,
    timeframe: Timeframe,
    today: NaiveDate,
    rng: &mut R,
) -> Series {
    let horizon = timeframe.horizon();
    let points = crate::trace_time!("Generate Series", 1_000, {
        let history = generate_history(trend, horizon.history_days, today, rng);
        let last_value = history
            .last()
            .map(|p| p.value)
            .unwrap_or_else(|| Engagement::from_f64(trend.seed_value()));
        extend_with_forecast(history, last_value, horizon.forecast_days, today, rng)
    });

    if DF.log_generation {
        log::debug!(
            "Generated {} series for {}: {} history + {} forecast points",
            trend,
            timeframe,
            horizon.history_days,
            horizon.forecast_days
        );
    }
    Series::from_points(points)
}
