//! Command handlers for CLI subcommands.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{info, warn};
use tracker_dnd::DropOutcome;
use tracker_models::ProjectStatus;

use crate::app::App;
use crate::cli::Commands;
use crate::config::Config;
use crate::error::Result;
use crate::repl::{handle_command, Repl, ReplCommand};

/// Execute a CLI command. `None` enters the REPL.
pub fn execute(command: Option<Commands>, config: &Config) -> Result<()> {
    match command {
        None | Some(Commands::Repl) => Repl::new(config.history_file.clone())?.run(),
        Some(Commands::Run { script }) => cmd_run(&script),
        Some(Commands::Demo) => run_demo(&mut App::new(), &mut io::stdout().lock()),
    }
}

fn cmd_run(script: &str) -> Result<()> {
    let path = PathBuf::from(shellexpand::tilde(script).to_string());
    info!(path = %path.display(), "Running script");

    let source = fs::read_to_string(&path)?;
    run_script(&mut App::new(), &source, &mut io::stdout().lock())
}

/// Runs REPL commands from `source`, one per line.
///
/// Blank lines and `#` comments are skipped. A failing command is reported
/// and the script goes on; `/quit` stops it early.
pub fn run_script(app: &mut App, source: &str, out: &mut impl Write) -> Result<()> {
    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        writeln!(out, "> {}", line)?;
        match handle_command(app, ReplCommand::parse(line), out) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => {
                warn!(line = number + 1, error = %e, "Script command failed");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
    Ok(())
}

/// Creates one project, drags it onto the finished bucket and prints the
/// board before and after.
pub fn run_demo(app: &mut App, out: &mut impl Write) -> Result<()> {
    let id = app.submit("Build API", "backend work", "3")?;
    writeln!(out, "Added project {}\n", id)?;
    write!(out, "{}", app.render())?;

    let outcome = app.drag(&id, ProjectStatus::Finished)?;
    writeln!(out, "\nDragged {} onto finished: {:?}\n", id, outcome)?;
    write!(out, "{}", app.render())?;

    if outcome != DropOutcome::Delivered {
        warn!(?outcome, "Demo drop was not delivered");
    }
    Ok(())
}
