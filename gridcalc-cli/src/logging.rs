use tracing::level_filters::LevelFilter;

use crate::LogLevel;

/// Installs the global subscriber. Logs go to stderr so they never mix with the menu.
pub fn init(level: LogLevel) {
    let filter = LevelFilter::from(level);
    if filter == LevelFilter::OFF {
        return;
    }

    let result = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = result {
        eprintln!("Logging already initialized: {err}");
    }
}
