use eframe::egui::{
    Align, CentralPanel, ComboBox, Context, Layout, RichText, TopBottomPanel, Visuals,
};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::Cli;

use crate::config::{DF, PLOT_CONFIG};
use crate::domain::{Timeframe, Trend};
use crate::engine::ForecastEngine;
use crate::models::Series;
use crate::ui::{PlotView, UI_CONFIG, UI_TEXT, UiStyleExt};

/// What the user picked. This is the only state that persists between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewSelection {
    pub timeframe: Timeframe,
    pub trend: Trend,
}

pub struct ForecastApp {
    selection: ViewSelection,
    engine: ForecastEngine,
    series: Series,
    /// Bumped on every regeneration so the plot cache knows when to rebuild.
    generation: u64,
    plot_view: PlotView,
}

impl ForecastApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let restored: Option<ViewSelection> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        let selection = Self::resolve_selection(restored, &args);

        let engine = match args.seed {
            Some(seed) => ForecastEngine::seeded(seed),
            None => ForecastEngine::new(),
        };

        Self::with_engine(engine, selection)
    }

    /// Command-line choices win over the persisted selection.
    pub fn resolve_selection(restored: Option<ViewSelection>, args: &Cli) -> ViewSelection {
        let mut selection = restored.unwrap_or_default();
        if let Some(timeframe) = args.timeframe {
            selection.timeframe = timeframe;
        }
        if let Some(trend) = args.trend {
            selection.trend = trend;
        }
        selection
    }

    pub fn with_engine(engine: ForecastEngine, selection: ViewSelection) -> Self {
        let mut app = Self {
            selection,
            engine,
            series: Series::default(),
            generation: 0,
            plot_view: PlotView::default(),
        };
        app.regenerate();
        app
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn regenerate(&mut self) {
        self.series = self
            .engine
            .generate(self.selection.trend, self.selection.timeframe);
        self.generation += 1;
    }

    /// Regenerates only when the selection actually changed.
    pub fn apply_selection(&mut self, next: ViewSelection) -> bool {
        if next == self.selection {
            return false;
        }
        if DF.log_selection {
            log::info!("Selection {:?} -> {:?}", self.selection, next);
        }
        self.selection = next;
        self.regenerate();
        true
    }

    fn render_header(&mut self, ctx: &Context) {
        let mut next = self.selection;
        TopBottomPanel::top("forecast_header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading_primary(&UI_TEXT.card_title);
                        ui.label_subdued(&UI_TEXT.card_description);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // right_to_left: iterate backwards so tabs read Week, Month, Quarter
                        for tf in Timeframe::iter().rev() {
                            ui.selectable_value(&mut next.timeframe, tf, tf.to_string());
                        }
                        ui.separator();
                        ComboBox::from_id_salt("trend_selector")
                            .selected_text(next.trend.to_string())
                            .show_ui(ui, |ui| {
                                for trend in Trend::iter() {
                                    ui.selectable_value(&mut next.trend, trend, trend.to_string());
                                }
                            });
                        ui.label(RichText::new(&UI_TEXT.label_trend).color(UI_CONFIG.colors.label));
                    });
                });
            });
        self.apply_selection(next);
    }

    fn render_legend(&mut self, ctx: &Context) {
        let mut regenerate = false;
        TopBottomPanel::bottom("forecast_legend")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.legend_entry(PLOT_CONFIG.history_color, &UI_TEXT.legend_history);
                    ui.add_space(16.0);
                    ui.legend_entry(PLOT_CONFIG.forecast_color, &UI_TEXT.legend_forecast);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        regenerate = ui.button(UI_TEXT.button_regenerate.as_str()).clicked();
                    });
                });
            });
        if regenerate {
            self.regenerate();
        }
    }
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_header(ctx);
        self.render_legend(ctx);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.plot_view.show(ui, &self.series, self.generation);
            });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("💾 SAVE [App]: ViewSelection = {:?}", self.selection);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.selection);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
