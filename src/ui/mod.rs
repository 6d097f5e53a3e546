mod app;
mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_text;

pub use app::{ForecastApp, ViewSelection};

pub(crate) use styles::{SeriesColor, UiStyleExt, apply_opacity};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
