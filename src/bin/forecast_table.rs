use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use engagement_forecast::{ForecastEngine, Series, SeriesPoint, Timeframe, Trend};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Print a synthetic engagement series (history + forecast)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Timeframe::Week)]
    timeframe: Timeframe,

    #[arg(long, value_enum, default_value_t = Trend::Upward)]
    trend: Trend,

    /// Seed for a reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Pin "today" (YYYY-MM-DD) instead of using the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Engagement")]
    engagement: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
}

impl Row {
    fn from_point(point: &SeriesPoint) -> Self {
        Self {
            day: point.day.to_string(),
            date: point.date.clone(),
            engagement: point.value.to_string(),
            kind: if point.is_forecast { "forecast" } else { "history" },
        }
    }
}

fn render_table(series: &Series, args: &Args) -> String {
    let rows: Vec<Row> = series.iter().map(Row::from_point).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let range = series
        .value_range()
        .map(|(lo, hi)| format!("{} - {}", lo, hi))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "{}\n{} / {}: {} history + {} forecast points, range {}",
        table,
        args.trend,
        args.timeframe,
        series.history().len(),
        series.forecast().len(),
        range
    )
}

fn render_json(series: &Series) -> Result<String> {
    serde_json::to_string_pretty(series).context("Failed to serialize series to JSON")
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write series to {:?}", path))?;
            log::info!("✅ Wrote series to {:?}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!("forecast_table: {:?}", args);

    let mut engine = match args.seed {
        Some(seed) => ForecastEngine::seeded(seed),
        None => ForecastEngine::new(),
    };
    if let Some(today) = args.today {
        engine = engine.with_today(today);
    }

    let series = engine.generate(args.trend, args.timeframe);

    let rendered = match args.format {
        OutputFormat::Table => render_table(&series, &args),
        OutputFormat::Json => render_json(&series)?,
    };

    emit(&rendered, args.output.as_deref())
}
