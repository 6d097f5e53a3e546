//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Historical series stroke (indigo)
    pub history_color: Color32,
    /// Forecast series stroke (green)
    pub forecast_color: Color32,
    pub line_width: f32,
    /// Opacity of the area fill under each series (0.0 = invisible, 1.0 = fully opaque)
    pub fill_opacity_pct: f32,
    /// Radius of the hovered point marker
    pub active_dot_radius: f32,
    pub plot_height: f32,
    /// Y axis is fixed to the engagement domain
    pub y_min: f64,
    pub y_max: f64,
    pub y_tick_step: f64,
    /// Roughly how many x labels to show before thinning
    pub x_label_target: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    history_color: Color32::from_rgb(79, 70, 229),  // #4f46e5
    forecast_color: Color32::from_rgb(34, 197, 94), // #22c55e
    line_width: 2.0,
    fill_opacity_pct: 0.35,
    active_dot_radius: 8.0,
    plot_height: 300.0,
    y_min: 0.0,
    y_max: 100.0,
    y_tick_step: 25.0,
    x_label_target: 8.0,
};
