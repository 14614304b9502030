#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod input;
pub mod logging;

pub use app::{GridCalcApp, MenuChoice};
pub use config::{load_config, Config, LogLevel};
