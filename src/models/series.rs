use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Engagement;
use crate::utils::day_label;

// ============================================================================
// SeriesPoint: one day on the engagement chart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Calendar day the point stands for.
    pub day: NaiveDate,
    /// x-axis label, e.g. `Oct 16`.
    pub date: String,
    pub value: Engagement,
    #[serde(default)]
    pub is_forecast: bool,
}

impl SeriesPoint {
    pub fn historical(day: NaiveDate, value: Engagement) -> Self {
        Self {
            day,
            date: day_label(day),
            value,
            is_forecast: false,
        }
    }

    pub fn forecast(day: NaiveDate, value: Engagement) -> Self {
        Self {
            is_forecast: true,
            ..Self::historical(day, value)
        }
    }
}

// ============================================================================
// Series: history followed by forecast, chronological
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Builds a series from already-ordered points.
    pub fn from_points(points: Vec<SeriesPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].day <= w[1].day),
            "series points must be chronological"
        );
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&SeriesPoint> {
        self.points.get(idx)
    }

    /// Index of the first forecast point, or `len()` when there is none.
    pub fn forecast_start(&self) -> usize {
        self.points
            .iter()
            .position(|p| p.is_forecast)
            .unwrap_or(self.points.len())
    }

    pub fn history(&self) -> &[SeriesPoint] {
        &self.points[..self.forecast_start()]
    }

    pub fn forecast(&self) -> &[SeriesPoint] {
        &self.points[self.forecast_start()..]
    }

    pub fn last_historical_value(&self) -> Option<Engagement> {
        self.history().last().map(|p| p.value)
    }

    /// Lowest and highest value across the whole series.
    pub fn value_range(&self) -> Option<(Engagement, Engagement)> {
        let min = self.points.iter().map(|p| p.value).min()?;
        let max = self.points.iter().map(|p| p.value).max()?;
        Some((min, max))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.date.as_str())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn sample() -> Series {
        Series::from_points(vec![
            SeriesPoint::historical(day(14), Engagement::new(40)),
            SeriesPoint::historical(day(15), Engagement::new(37)),
            SeriesPoint::historical(day(16), Engagement::new(44)),
            SeriesPoint::forecast(day(17), Engagement::new(47)),
            SeriesPoint::forecast(day(18), Engagement::new(46)),
        ])
    }

    #[test]
    fn splits_history_and_forecast() {
        let s = sample();
        assert_eq!(s.forecast_start(), 3);
        assert_eq!(s.history().len(), 3);
        assert_eq!(s.forecast().len(), 2);
        assert_eq!(s.last_historical_value(), Some(Engagement::new(44)));
        assert_eq!(
            s.value_range(),
            Some((Engagement::new(37), Engagement::new(47)))
        );
    }

    #[test]
    fn empty_series_has_no_range() {
        let s = Series::default();
        assert!(s.is_empty());
        assert_eq!(s.forecast_start(), 0);
        assert_eq!(s.value_range(), None);
        assert_eq!(s.last_historical_value(), None);
    }

    #[test]
    fn serializes_like_the_chart_payload() {
        let point = SeriesPoint::forecast(day(17), Engagement::new(47));
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "day": "2026-10-17",
                "date": "Oct 17",
                "value": 47,
                "isForecast": true
            })
        );
    }

    #[test]
    fn is_forecast_defaults_to_false_when_absent() {
        let point: SeriesPoint =
            serde_json::from_str(r#"{"day":"2026-10-14","date":"Oct 14","value":40}"#).unwrap();
        assert!(!point.is_forecast);
    }
}
