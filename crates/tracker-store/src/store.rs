//! ProjectStore - the single writer of the project collection.
//!
//! - `RwLock<Vec<Project>>` keeps insertion order; status changes never
//!   reorder.
//! - Every successful mutation ends in exactly one round of listener
//!   notifications carrying the whole collection.
//! - No lock is held while listeners run.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use tracker_models::{Project, ProjectId, ProjectStatus};

use crate::filter::ProjectFilter;
use crate::listeners::{ListenerHandle, ListenerRegistry};

/// Result of a [`ProjectStore::move_project`] call.
///
/// None of these is an error; only `Moved` notifies listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed.
    Moved,
    /// Project already had the requested status.
    Unchanged,
    /// No project with that id.
    NotFound,
}

/// Authoritative owner of all projects.
///
/// Construct one per process and share it with `Arc`:
///
/// ```
/// use std::sync::Arc;
/// use tracker_store::ProjectStore;
///
/// let store = Arc::new(ProjectStore::new());
/// let for_view = Arc::clone(&store);
/// for_view.add_listener(|projects| println!("{} project(s)", projects.len()));
/// store.add_project("Build API", "backend work", 3);
/// ```
///
/// Input is trusted: the store does not validate titles or headcounts.
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
    listeners: ListenerRegistry<Project>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Registers a listener for every future change.
    ///
    /// There is no unsubscribe: listeners live as long as the store.
    pub fn add_listener<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(Vec<Project>) + Send + Sync + 'static,
    {
        let handle = self.listeners.register(listener);
        debug!(listener = %handle, "Listener registered");
        handle
    }

    /// Appends a new `Active` project and notifies listeners.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();

        debug!(project_id = %id, title = %project.title, people, "Adding project");
        self.write().push(project);

        self.notify_listeners();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Unknown ids and unchanged statuses are silent no-ops: a stale drag
    /// must never take a view down.
    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let outcome = {
            let mut projects = self.write();
            match projects.iter_mut().find(|p| &p.id == id) {
                None => MoveOutcome::NotFound,
                Some(project) if project.status == new_status => MoveOutcome::Unchanged,
                Some(project) => {
                    project.status = new_status;
                    MoveOutcome::Moved
                }
            }
        };

        debug!(project_id = %id, status = %new_status, ?outcome, "Move requested");

        if outcome == MoveOutcome::Moved {
            self.notify_listeners();
        }
        outcome
    }

    /// Shallow copy of the current collection, in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.read().clone()
    }

    /// Gets a copy of a project by id.
    pub fn get(&self, id: &ProjectId) -> Option<Project> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    /// Lists projects matching `filter`, in insertion order.
    pub fn list(&self, filter: &ProjectFilter) -> Vec<Project> {
        self.read()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Each listener gets a copy taken right before its call, so a listener
    // that mutates the store never leaves the ones after it with stale data.
    fn notify_listeners(&self) {
        let delivered = self.listeners.notify(|| self.snapshot());
        debug!(projects = self.len(), delivered, "Listeners notified");
    }

    // Writers only push or flip a status, so a poisoned Vec is still valid.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}
