use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use gridcalc_core::DEFAULT_CELL_WIDTH;

/// Settings for the menu driver, read from an optional JSON file. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of each rendered cell in characters
    pub cell_width: usize,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            log_level: LogLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    if config.cell_width == 0 {
        anyhow::bail!("cell_width must be at least 1");
    }
    Ok(config)
}
