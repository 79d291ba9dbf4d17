//! Type-safe project identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable identifier of a project.
///
/// Freshly generated ids look like `prj-<uuid>`, but callers must treat
/// the value as opaque: ids read back from a drag payload are wrapped
/// as-is with [`ProjectId::from_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    const PREFIX: &'static str = "prj";

    /// Creates a new random ID.
    pub fn new() -> Self {
        Self(format!("{}-{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Creates an ID from an existing string (payloads, tests).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_id_prefix() {
        let id = ProjectId::new();
        assert!(id.as_str().starts_with("prj-"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<ProjectId> = (0..500).map(|_| ProjectId::new()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_id_from_string_is_opaque() {
        let id = ProjectId::from_string("p1");
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id, ProjectId::from("p1"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProjectId::from_string("prj-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prj-test\"");

        let parsed: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = ProjectId::from_string("prj-123");
        assert_eq!(format!("{}", id), "prj-123");
    }
}
