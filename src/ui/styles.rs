use {
    crate::{config::PLOT_CONFIG, models::SeriesPoint, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Sense, Ui, Vec2},
};

pub trait SeriesColor {
    fn color(&self) -> Color32;
}

impl SeriesColor for SeriesPoint {
    fn color(&self) -> Color32 {
        if self.is_forecast {
            PLOT_CONFIG.forecast_color
        } else {
            PLOT_CONFIG.history_color
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub(crate) trait UiStyleExt {
    /// Filled circle followed by a label, as used in the chart legend.
    fn legend_entry(&mut self, color: Color32, text: &str);
    fn label_subdued(&mut self, text: impl Into<String>);
    fn heading_primary(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn legend_entry(&mut self, color: Color32, text: &str) {
        let r = UI_CONFIG.legend_dot_radius;
        let (rect, _) = self.allocate_exact_size(Vec2::splat(r * 2.0), Sense::hover());
        self.painter().circle_filled(rect.center(), r, color);
        self.label(RichText::new(text).color(UI_CONFIG.colors.label));
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).color(UI_CONFIG.colors.subdued).small());
    }

    fn heading_primary(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text.into()).color(UI_CONFIG.colors.heading).strong());
    }
}
