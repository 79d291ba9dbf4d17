//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version with git hash and build date, e.g. `0.1.0 (abc1234, 2026-10-16)`.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Tracker - move projects between buckets by dragging them
#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// File the REPL keeps its input history in
    #[arg(long, env = "TRACKER_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive REPL mode
    Repl,

    /// Run REPL commands from a file
    Run {
        /// Path to the script (~ is expanded)
        #[arg(required = true)]
        script: String,
    },

    /// Create a project and drag it to the finished bucket
    Demo,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tracker"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["tracker", "run", "~/board.txt"]);
        match cli.command {
            Some(Commands::Run { script }) => assert_eq!(script, "~/board.txt"),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_history_file() {
        let cli = Cli::parse_from(["tracker", "--history-file", "/tmp/h.txt", "repl"]);
        assert_eq!(cli.history_file, Some(PathBuf::from("/tmp/h.txt")));
        assert!(matches!(cli.command, Some(Commands::Repl)));
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["tracker", "-vv", "demo"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_string_carries_build_stamp() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(env!("GIT_HASH")));
        assert!(!env!("GIT_HASH").is_empty());
        assert_eq!(env!("BUILD_DATE").len(), "2026-10-16".len());
    }
}
