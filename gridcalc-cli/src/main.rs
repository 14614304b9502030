#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use clap::Parser;
use gridcalc_cli::{load_config, logging, Config, GridCalcApp, LogLevel};

/// Interactive calculator for two integer grids.
#[derive(Debug, Parser)]
#[command(name = "gridcalc", version)]
struct CliArgs {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the log level from the config file. Logs are written to stderr.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Overrides the rendered cell width
    #[arg(long)]
    cell_width: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(width) = args.cell_width {
        anyhow::ensure!(width > 0, "--cell-width must be at least 1");
        config.cell_width = width;
    }

    logging::init(config.log_level);
    tracing::debug!(?args, ?config, "starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    GridCalcApp::new(stdin.lock(), stdout.lock(), config).run()
}
