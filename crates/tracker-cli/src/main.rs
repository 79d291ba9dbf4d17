//! Tracker CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tracker_cli::cli::Cli;
use tracker_cli::commands;
use tracker_cli::config::Config;

fn main() {
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = commands::execute(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
