use std::sync::LazyLock;

pub struct UiText {
    // --- Header ---
    pub card_title: String,
    pub card_description: String,
    pub label_trend: String,

    // --- Footer ---
    pub legend_history: String,
    pub legend_forecast: String,
    pub button_regenerate: String,

    // --- PLOT LABELS ---
    pub plot_id: String,
    pub plot_series_history: String,
    pub plot_series_forecast: String,
    pub tooltip_date_prefix: String,
    pub tooltip_value_suffix: String,
    pub plot_no_data: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    card_title: "Performance Forecast".to_string(),
    card_description: "Engagement predictions based on AI analysis".to_string(),
    label_trend: "Trend".to_string(),

    legend_history: "Historical data".to_string(),
    legend_forecast: "AI forecast".to_string(),
    button_regenerate: "Regenerate".to_string(),

    plot_id: "performance_forecast_plot".to_string(),
    plot_series_history: "Performance".to_string(),
    plot_series_forecast: "Forecast".to_string(),
    tooltip_date_prefix: "Date: ".to_string(),
    tooltip_value_suffix: "% Engagement".to_string(),
    plot_no_data: "No data for this timeframe".to_string(),
});
