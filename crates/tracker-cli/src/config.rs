//! Runtime configuration for the terminal front end.
//!
//! # Environment Variables
//!
//! - `TRACKER_HISTORY_FILE`: REPL history file (same as `--history-file`)
//! - `RUST_LOG`: overrides the `-v` log level

use std::path::PathBuf;

use crate::cli::Cli;

/// Default history file name under home.
const DEFAULT_HISTORY_FILE: &str = ".tracker_history";

/// Settings resolved from flags, environment and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub history_file: PathBuf,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            history_file: cli
                .history_file
                .clone()
                .unwrap_or_else(default_history_file),
            log_level: cli.log_level(),
        }
    }
}

/// `~/.tracker_history`, or `.tracker_history` without a home directory.
pub fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_HISTORY_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
}
