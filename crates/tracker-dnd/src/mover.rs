//! Seam between drop targets and whatever owns project status.

use std::sync::Arc;

use tracker_models::{ProjectId, ProjectStatus};
use tracker_store::{MoveOutcome, ProjectStore};

/// Performs the status transition a drop asks for.
pub trait ProjectMover {
    fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome;
}

impl ProjectMover for ProjectStore {
    fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
        ProjectStore::move_project(self, id, status)
    }
}

impl<M: ProjectMover + ?Sized> ProjectMover for Arc<M> {
    fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
        (**self).move_project(id, status)
    }
}

impl<M: ProjectMover + ?Sized> ProjectMover for &M {
    fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
        (**self).move_project(id, status)
    }
}
