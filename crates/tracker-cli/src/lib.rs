//! Terminal front end for the project tracker.
//!
//! Hosts the presentation layer around the store: the input form, one
//! list view per status bucket, and the REPL and script runner that drive
//! them.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod validation;
pub mod views;

pub use app::App;
pub use error::{CliError, Result};
