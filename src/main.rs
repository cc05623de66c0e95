mod app;
mod components;
mod config;
mod curve;
mod curve_canvas;
mod display;
mod error;
mod provider;
mod store;
mod view;
mod weather;

use app::WeatherWidget;
use clap::Parser;
use config::{Args, WidgetConfig};
use iced::{window, Application, Settings, Size};
use provider::{DemoProvider, SnapshotProvider};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if args.dump_demo {
        let snapshots = DemoProvider.fetch_snapshots()?;
        println!("{}", provider::to_json(&snapshots)?);
        return Ok(());
    }

    let config = WidgetConfig::from_args(&args)?;
    tracing::info!(
        "Starting weather widget, refreshing every {} ms",
        config.refresh_interval_ms
    );

    WeatherWidget::run(Settings {
        window: window::Settings {
            size: Size::new(1180.0, 720.0),
            decorations: false,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })?;
    Ok(())
}
