use eframe::egui::{RichText, Ui};
use egui_plot::{GridMark, Line, Plot, PlotPoints, Points};

use crate::config::PLOT_CONFIG;
use crate::models::Series;
use crate::ui::{SeriesColor, UI_CONFIG, UI_TEXT, apply_opacity};

/// Plot-ready copy of a series. Rebuilt only when the series generation changes.
#[derive(Clone, Default)]
pub struct PlotCache {
    pub generation: u64,
    pub history: Vec<[f64; 2]>,
    /// Starts at the last historical point so both areas join up.
    pub forecast: Vec<[f64; 2]>,
    pub labels: Vec<String>,
    pub forecast_start: usize,
}

impl PlotCache {
    fn build(series: &Series, generation: u64) -> Self {
        let forecast_start = series.forecast_start();
        let coords: Vec<[f64; 2]> = series
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value.as_f64()])
            .collect();

        let history = coords[..forecast_start].to_vec();
        let join = forecast_start.saturating_sub(1);
        let forecast = if forecast_start < coords.len() {
            coords[join..].to_vec()
        } else {
            Vec::new()
        };

        Self {
            generation,
            history,
            forecast,
            labels: series.labels().map(str::to_string).collect(),
            forecast_start,
        }
    }

    /// Index of the point under plot x coordinate `x`, if any.
    fn index_at(&self, x: f64) -> Option<usize> {
        let idx = x.round();
        if idx < 0.0 || idx as usize >= self.labels.len() {
            return None;
        }
        Some(idx as usize)
    }
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 1.0 {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one day
    (nice_step * mag).max(1.0)
}

impl PlotView {
    pub fn show(&mut self, ui: &mut Ui, series: &Series, generation: u64) {
        if series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(&UI_TEXT.plot_no_data).color(UI_CONFIG.colors.subdued));
            });
            return;
        }

        let stale = self
            .cache
            .as_ref()
            .is_none_or(|c| c.generation != generation);
        if stale {
            self.cache = Some(crate::trace_time!("Build Plot Cache", 500, {
                PlotCache::build(series, generation)
            }));
        }
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        let point_count = cache.labels.len();
        let x_step = calculate_adaptive_step(point_count as f64, PLOT_CONFIG.x_label_target);
        let x_labels = cache.labels.clone();
        let tooltip_labels = cache.labels.clone();

        Plot::new(UI_TEXT.plot_id.as_str())
            .height(PLOT_CONFIG.plot_height)
            .include_y(PLOT_CONFIG.y_min)
            .include_y(PLOT_CONFIG.y_max)
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show_axes([true, true])
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                x_labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .y_axis_formatter(|mark, _range| format!("{}%", mark.value.round()))
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let start = (min / x_step).ceil() as i64;
                let end = (max / x_step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * x_step,
                        step_size: x_step,
                    })
                    .collect()
            })
            .y_grid_spacer(|_input| {
                let step = PLOT_CONFIG.y_tick_step;
                let divisions = ((PLOT_CONFIG.y_max - PLOT_CONFIG.y_min) / step).round() as i64;
                (0..=divisions)
                    .map(|i| GridMark {
                        value: PLOT_CONFIG.y_min + i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .label_formatter(move |_name, point| {
                let idx = point.x.round();
                if idx < 0.0 {
                    return String::new();
                }
                match tooltip_labels.get(idx as usize) {
                    Some(label) => format!(
                        "{}{}\n{}{}",
                        UI_TEXT.tooltip_date_prefix,
                        label,
                        point.y.round(),
                        UI_TEXT.tooltip_value_suffix
                    ),
                    None => String::new(),
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-0.5..=(point_count as f64 - 0.5));
                plot_ui.set_plot_bounds_y(PLOT_CONFIG.y_min..=PLOT_CONFIG.y_max);

                if !cache.history.is_empty() {
                    plot_ui.line(
                        Line::new(
                            UI_TEXT.plot_series_history.as_str(),
                            PlotPoints::new(cache.history.clone()),
                        )
                        .color(PLOT_CONFIG.history_color)
                        .width(PLOT_CONFIG.line_width)
                        .fill(PLOT_CONFIG.y_min as f32),
                    );
                }

                if !cache.forecast.is_empty() {
                    plot_ui.line(
                        Line::new(
                            UI_TEXT.plot_series_forecast.as_str(),
                            PlotPoints::new(cache.forecast.clone()),
                        )
                        .color(PLOT_CONFIG.forecast_color)
                        .width(PLOT_CONFIG.line_width)
                        .fill(PLOT_CONFIG.y_min as f32),
                    );
                }

                // Active dot under the pointer
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let hovered = cache
                        .index_at(pointer.x)
                        .and_then(|i| series.get(i).map(|p| (i, p)));
                    if let Some((idx, point)) = hovered {
                        let dot = vec![[idx as f64, point.value.as_f64()]];
                        let color =
                            apply_opacity(point.color(), PLOT_CONFIG.fill_opacity_pct * 2.0);
                        plot_ui.points(
                            Points::new("", PlotPoints::new(dot))
                                .radius(PLOT_CONFIG.active_dot_radius)
                                .color(color),
                        );
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScriptedRandom;
    use crate::domain::{Timeframe, Trend};
    use crate::engine::ForecastEngine;
    use chrono::NaiveDate;

    fn week_series() -> Series {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        ForecastEngine::with_rng(ScriptedRandom::constant(0.5))
            .with_today(today)
            .generate(Trend::Upward, Timeframe::Week)
    }

    #[test]
    fn forecast_line_joins_the_last_historical_point() {
        let cache = PlotCache::build(&week_series(), 1);
        assert_eq!(cache.history.len(), 7);
        assert_eq!(cache.forecast.len(), 4);
        assert_eq!(cache.forecast[0], cache.history[6]);
        assert_eq!(cache.forecast_start, 7);
        assert_eq!(cache.labels.len(), 10);
    }

    #[test]
    fn index_lookup_is_bounded() {
        let cache = PlotCache::build(&week_series(), 1);
        assert_eq!(cache.index_at(-0.4), Some(0));
        assert_eq!(cache.index_at(3.6), Some(4));
        assert_eq!(cache.index_at(9.4), Some(9));
        assert_eq!(cache.index_at(9.6), None);
        assert_eq!(cache.index_at(-0.6), None);
    }

    #[test]
    fn adaptive_step_is_a_nice_number() {
        assert_eq!(calculate_adaptive_step(10.0, 8.0), 1.0);
        assert_eq!(calculate_adaptive_step(40.0, 8.0), 5.0);
        assert_eq!(calculate_adaptive_step(120.0, 8.0), 20.0);
    }
}
