//! Wires the store to the form and both bucket views.

use std::sync::Arc;

use tracing::info;
use tracker_dnd::{DragSession, DropOutcome};
use tracker_models::{ProjectId, ProjectStatus};
use tracker_store::ProjectStore;

use crate::error::{CliError, Result};
use crate::views::{ProjectInput, ProjectItemView, ProjectListView};

/// The whole board: one store, one input form, two lists.
///
/// The store is created once here and handed to every view.
pub struct App {
    store: Arc<ProjectStore>,
    input: ProjectInput,
    active: ProjectListView,
    finished: ProjectListView,
}

impl App {
    pub fn new() -> Self {
        Self::with_store(Arc::new(ProjectStore::new()))
    }

    /// Builds the views around an existing store. The active list
    /// subscribes before the finished one.
    pub fn with_store(store: Arc<ProjectStore>) -> Self {
        let input = ProjectInput::new(Arc::clone(&store));
        let active = ProjectListView::new(Arc::clone(&store), ProjectStatus::Active);
        let finished = ProjectListView::new(Arc::clone(&store), ProjectStatus::Finished);

        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    /// Fills and submits the input form.
    pub fn submit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Result<ProjectId> {
        self.input.fill(title, description, people);
        let id = self.input.submit()?;
        info!(project_id = %id, "Project created");
        Ok(id)
    }

    /// The list view for a bucket.
    pub fn list(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    fn list_mut(&mut self, status: ProjectStatus) -> &mut ProjectListView {
        match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }

    /// Finds the rendered item for `id` in either bucket.
    pub fn find_item(&self, id: &ProjectId) -> Option<ProjectItemView> {
        self.active.item(id).or_else(|| self.finished.item(id))
    }

    /// Picks up the item `id`, hovers it over the `to` bucket and
    /// releases it there.
    pub fn drag(&mut self, id: &ProjectId, to: ProjectStatus) -> Result<DropOutcome> {
        let item = self
            .find_item(id)
            .ok_or_else(|| CliError::NotOnBoard(id.clone()))?;

        let mut session = DragSession::start(&item);
        session.hover(self.list_mut(to));
        let outcome = session.release();

        info!(project_id = %id, bucket = %to, ?outcome, "Drag finished");
        Ok(outcome)
    }

    /// Picks up the item `id` and lets go outside every bucket.
    pub fn cancel_drag(&self, id: &ProjectId) -> Result<DropOutcome> {
        let item = self
            .find_item(id)
            .ok_or_else(|| CliError::NotOnBoard(id.clone()))?;

        Ok(DragSession::start(&item).cancel())
    }

    /// Both buckets, active first.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.active.render(), self.finished.render())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_renders_into_active() {
        let mut app = App::new();
        let id = app.submit("Build API", "backend work", "3").unwrap();

        assert!(app.list(ProjectStatus::Active).item(&id).is_some());
        assert!(app.list(ProjectStatus::Finished).item(&id).is_none());
    }

    #[test]
    fn test_invalid_submit_is_reported() {
        let mut app = App::new();
        let err = app.submit("", "backend work", "3").unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert!(app.store().is_empty());
    }

    #[test]
    fn test_drag_moves_between_buckets() {
        let mut app = App::new();
        let id = app.submit("Build API", "backend work", "3").unwrap();

        assert_eq!(
            app.drag(&id, ProjectStatus::Finished).unwrap(),
            DropOutcome::Delivered
        );
        assert!(app.list(ProjectStatus::Finished).item(&id).is_some());
        assert!(app.list(ProjectStatus::Active).item(&id).is_none());
        assert!(!app.list(ProjectStatus::Finished).is_droppable());
    }

    #[test]
    fn test_drag_unknown_item() {
        let mut app = App::new();
        let err = app
            .drag(&ProjectId::from("nope"), ProjectStatus::Finished)
            .unwrap_err();
        assert!(matches!(err, CliError::NotOnBoard(_)));
    }

    #[test]
    fn test_cancel_changes_nothing() {
        let mut app = App::new();
        let id = app.submit("Build API", "backend work", "3").unwrap();
        let renders = app.list(ProjectStatus::Active).render_count();

        assert_eq!(app.cancel_drag(&id).unwrap(), DropOutcome::Cancelled);
        assert_eq!(app.store().get(&id).unwrap().status, ProjectStatus::Active);
        assert_eq!(app.list(ProjectStatus::Active).render_count(), renders);
    }
}
