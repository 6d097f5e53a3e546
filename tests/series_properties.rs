//! Property tests for the engagement series generator.

use chrono::NaiveDate;
use engagement_forecast::analysis::{extend_with_forecast, forecast_points, generate_history};
use engagement_forecast::{Engagement, ForecastEngine, ScriptedRandom, Timeframe, Trend};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn arb_trend() -> impl Strategy<Value = Trend> {
    prop_oneof![Just(Trend::Upward), Just(Trend::Downward), Just(Trend::Stable)]
}

fn arb_timeframe() -> impl Strategy<Value = Timeframe> {
    prop_oneof![
        Just(Timeframe::Week),
        Just(Timeframe::Month),
        Just(Timeframe::Quarter)
    ]
}

fn arb_today() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn history_has_exactly_days_points(
        trend in arb_trend(),
        days in 0usize..200,
        seed in any::<u64>(),
        today in arb_today(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let history = generate_history(trend, days, today, &mut rng);
        prop_assert_eq!(history.len(), days);
        prop_assert!(history.iter().all(|p| !p.is_forecast));
    }
}

proptest! {
    #[test]
    fn history_respects_trend_bounds(
        trend in arb_trend(),
        days in 1usize..200,
        seed in any::<u64>(),
    ) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let history = generate_history(trend, days, today, &mut rng);
        for p in &history {
            let v = p.value.value();
            match trend {
                Trend::Upward => prop_assert!(v <= 95),
                Trend::Downward => prop_assert!((15..=100).contains(&v)),
                Trend::Stable => prop_assert!((15..=85).contains(&v)),
            }
        }
    }
}

proptest! {
    #[test]
    fn forecast_is_capped_and_flagged(
        last in 0u8..=100,
        forecast_days in 0usize..60,
        seed in any::<u64>(),
    ) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let forecast = forecast_points(Engagement::new(last), forecast_days, today, &mut rng);
        prop_assert_eq!(forecast.len(), forecast_days);
        for p in &forecast {
            prop_assert!(p.is_forecast);
            prop_assert!(p.value.value() <= 100);
            // Additive from the last value: never below it
            prop_assert!(p.value.value() >= last);
        }
    }
}

proptest! {
    #[test]
    fn combined_series_is_chronological(
        trend in arb_trend(),
        timeframe in arb_timeframe(),
        seed in any::<u64>(),
        today in arb_today(),
    ) {
        let mut engine = ForecastEngine::seeded(seed).with_today(today);
        let series = engine.generate(trend, timeframe);
        let horizon = timeframe.horizon();

        prop_assert_eq!(series.len(), horizon.total_days());
        prop_assert_eq!(series.forecast_start(), horizon.history_days);
        prop_assert!(series.points().windows(2).all(|w| w[0].day < w[1].day));
        prop_assert!(series.iter().all(|p| p.value.value() <= 100));
        prop_assert_eq!(series.history().last().map(|p| p.day), Some(today));
    }
}

proptest! {
    #[test]
    fn labels_do_not_depend_on_randomness(
        timeframe in arb_timeframe(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let a = ForecastEngine::seeded(seed_a).with_today(today).generate(Trend::Upward, timeframe);
        let b = ForecastEngine::seeded(seed_b).with_today(today).generate(Trend::Upward, timeframe);
        prop_assert_eq!(a.len(), b.len());
        prop_assert!(a.labels().eq(b.labels()));
    }
}

#[test]
fn week_scenario_end_to_end() {
    let today = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
    let (history_days, forecast_days) = engagement_forecast::select_timeframe(Timeframe::Week);

    let mut rng = ScriptedRandom::constant(0.5);
    let history = generate_history(Trend::Upward, history_days, today, &mut rng);
    let last = history[6].value;
    let combined = extend_with_forecast(history, last, forecast_days, today, &mut rng);

    let labels: Vec<&str> = combined.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Dec 24", "Dec 25", "Dec 26", "Dec 27", "Dec 28", "Dec 29", "Dec 30", "Dec 31",
            "Jan 1", "Jan 2"
        ]
    );
    assert_eq!(combined.iter().filter(|p| p.is_forecast).count(), 3);
    assert!(combined.iter().all(|p| (15..=100).contains(&p.value.value())));
}

#[test]
fn json_payload_round_trips_through_serde() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let series = ForecastEngine::seeded(11)
        .with_today(today)
        .generate(Trend::Stable, Timeframe::Month);

    let json = serde_json::to_string(&series).unwrap();
    assert!(json.contains("\"isForecast\":true"));
    let back: engagement_forecast::Series = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}
