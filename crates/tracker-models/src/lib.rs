//! Core data models for the project tracker.
//!
//! Projects are the only entity: a titled unit of work with a headcount
//! and a status that decides which bucket it is shown in.

pub mod ids;
pub mod project;

pub use ids::ProjectId;
pub use project::{ParseStatusError, Project, ProjectStatus};
