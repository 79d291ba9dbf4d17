//! Project types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ids::ProjectId;

/// Status of a project; decides which bucket renders it.
///
/// Both states are reachable from each other. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress. Every new project starts here.
    #[default]
    Active,
    /// Work done.
    Finished,
}

impl ProjectStatus {
    /// Lowercase name, as used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A tracked unit of work.
///
/// Fields are public for reading; once a project is inside the store only
/// the store changes it (and only its `status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, fixed at creation.
    pub id: ProjectId,

    /// Short title.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Number of people assigned.
    pub people: u32,

    /// Current status.
    pub status: ProjectStatus,

    /// When the project was created; shown as a date on each rendered item.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new `Active` project with a fresh id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(ProjectId::new(), title, description, people)
    }

    /// Creates a new `Active` project with the given id.
    pub fn with_id(
        id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Headcount as text: `"1 person"` or `"N persons"`.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    /// Returns true if the project is in the given status.
    pub fn is(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
