//! Error types for the terminal front end.

use thiserror::Error;
use tracker_models::ProjectId;

use crate::validation::ValidationError;

/// Errors surfaced to the user by the CLI and REPL.
#[derive(Error, Debug)]
pub enum CliError {
    /// Form input was rejected before reaching the store.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// No rendered item carries this id, so there is nothing to pick up.
    #[error("project not on the board: {0}")]
    NotOnBoard(ProjectId),

    /// Malformed REPL command.
    #[error("{0}")]
    Usage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
