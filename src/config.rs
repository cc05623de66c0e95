use crate::error::{Result, WidgetError};
use crate::provider::DataSource;
use crate::store::WrapPolicy;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REFRESH_MS: u64 = 3000;

#[derive(Parser, Debug)]
#[command(name = "weather-widget", about = "Desktop weather widget with a six-day forecast")]
pub struct Args {
    /// Milliseconds between city refreshes
    #[clap(long, default_value_t = DEFAULT_REFRESH_MS)]
    pub interval_ms: u64,

    /// JSON file of snapshots; the built-in demo cities are used when omitted
    #[clap(long)]
    pub data: Option<PathBuf>,

    /// Always cycle through four entries, whatever number is loaded
    #[clap(long)]
    pub legacy_wrap: bool,

    #[clap(long, default_value_t = String::from("info"))]
    pub log_level: String,

    /// Print the demo snapshots as JSON and exit
    #[clap(long)]
    pub dump_demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub refresh_interval_ms: u64,
    pub wrap_policy: WrapPolicy,
    pub data_source: DataSource,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_MS,
            wrap_policy: WrapPolicy::default(),
            data_source: DataSource::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            refresh_interval_ms: args.interval_ms,
            wrap_policy: if args.legacy_wrap {
                WrapPolicy::Legacy
            } else {
                WrapPolicy::Populated
            },
            data_source: args
                .data
                .clone()
                .map(DataSource::File)
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_ms == 0 {
            return Err(WidgetError::config("refresh interval must be greater than zero"));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_args() {
        let args = Args::parse_from(["weather-widget"]);
        let config = WidgetConfig::from_args(&args).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_millis(3000));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_args_override_defaults() {
        let args = Args::parse_from([
            "weather-widget",
            "--interval-ms",
            "500",
            "--data",
            "cities.json",
            "--legacy-wrap",
        ]);
        let config = WidgetConfig::from_args(&args).unwrap();
        assert_eq!(config.refresh_interval_ms, 500);
        assert_eq!(config.wrap_policy, WrapPolicy::Legacy);
        assert_eq!(
            config.data_source,
            DataSource::File(PathBuf::from("cities.json"))
        );
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let args = Args::parse_from(["weather-widget", "--interval-ms", "0"]);
        assert!(matches!(
            WidgetConfig::from_args(&args),
            Err(WidgetError::Config(_))
        ));
    }
}
