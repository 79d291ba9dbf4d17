//! Project filtering for queries and bucket views.

use tracker_models::{Project, ProjectStatus};

/// Filter criteria for querying projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by status.
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
}

impl ProjectFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the title filter.
    pub fn with_title_contains(mut self, needle: impl Into<String>) -> Self {
        self.title_contains = Some(needle.into().to_lowercase());
        self
    }

    /// Returns true if the project matches this filter.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if !project.is(status) {
                return false;
            }
        }

        if let Some(ref needle) = self.title_contains {
            if !project.title.to_lowercase().contains(needle) {
                return false;
            }
        }

        true
    }

    /// Keeps the matching projects, preserving order.
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}
