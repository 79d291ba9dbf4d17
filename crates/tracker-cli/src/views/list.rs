//! One bucket of projects: a listener on the store and a drop target.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;
use tracker_dnd::{BucketTarget, DragEvent, DragTarget};
use tracker_models::{ProjectId, ProjectStatus};
use tracker_store::{ProjectFilter, ProjectStore};

use crate::views::item::ProjectItemView;

/// Shows the projects of one status and accepts drops into it.
///
/// The view subscribes to the store exactly once, at construction, and
/// rebuilds its items from every snapshot it receives.
pub struct ProjectListView {
    items: Arc<RwLock<Vec<ProjectItemView>>>,
    renders: Arc<AtomicUsize>,
    target: BucketTarget<Arc<ProjectStore>>,
}

impl ProjectListView {
    pub fn new(store: Arc<ProjectStore>, status: ProjectStatus) -> Self {
        let view = Self {
            items: Arc::new(RwLock::new(Vec::new())),
            renders: Arc::new(AtomicUsize::new(0)),
            target: BucketTarget::new(Arc::clone(&store), status),
        };
        view.configure(&store);
        view
    }

    fn configure(&self, store: &ProjectStore) {
        let status = self.target.status();
        let filter = ProjectFilter::new().with_status(status);
        let items = Arc::clone(&self.items);
        let renders = Arc::clone(&self.renders);

        store.add_listener(move |projects| {
            let relevant: Vec<ProjectItemView> = filter
                .apply(projects)
                .into_iter()
                .map(ProjectItemView::new)
                .collect();
            trace!(bucket = %status, items = relevant.len(), "Re-rendering list");

            *items.write().unwrap_or_else(PoisonError::into_inner) = relevant;
            renders.fetch_add(1, Ordering::SeqCst);
        });
    }

    /// `"ACTIVE PROJECTS"` or `"FINISHED PROJECTS"`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.target.status().as_str().to_uppercase())
    }

    /// Items currently shown, in store order.
    pub fn items(&self) -> Vec<ProjectItemView> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The rendered item for `id`, if this bucket shows it.
    pub fn item(&self, id: &ProjectId) -> Option<ProjectItemView> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// How many snapshots this view has rendered.
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    /// Whether the drop highlight is on.
    pub fn is_droppable(&self) -> bool {
        self.target.is_droppable()
    }

    pub fn render(&self) -> String {
        let marker = if self.is_droppable() { " [drop here]" } else { "" };
        let mut out = format!("{}{}\n", self.heading(), marker);

        let items = self.items();
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for item in &items {
            let mut lines = item.render().into_iter();
            if let Some(title) = lines.next() {
                out.push_str(&format!("  - {} ({})\n", title, item.id()));
            }
            for line in lines {
                out.push_str(&format!("      {}\n", line));
            }
        }
        out
    }
}

impl DragTarget for ProjectListView {
    fn on_drag_over(&mut self, event: &mut DragEvent<'_>) {
        self.target.on_drag_over(event);
    }

    fn on_drag_leave(&mut self, event: &DragEvent<'_>) {
        self.target.on_drag_leave(event);
    }

    fn on_drop(&mut self, event: &DragEvent<'_>) {
        self.target.on_drop(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shows_only_its_bucket() {
        let store = Arc::new(ProjectStore::new());
        let active = ProjectListView::new(Arc::clone(&store), ProjectStatus::Active);
        let finished = ProjectListView::new(Arc::clone(&store), ProjectStatus::Finished);

        let a = store.add_project("A", "a", 1);
        let b = store.add_project("B", "b", 2);
        store.move_project(&b, ProjectStatus::Finished);

        let ids = |view: &ProjectListView| -> Vec<ProjectId> {
            view.items().iter().map(|i| i.id().clone()).collect()
        };
        assert_eq!(ids(&active), vec![a]);
        assert_eq!(ids(&finished), vec![b]);
    }

    #[test]
    fn test_every_view_renders_on_every_change() {
        let store = Arc::new(ProjectStore::new());
        let active = ProjectListView::new(Arc::clone(&store), ProjectStatus::Active);
        let finished = ProjectListView::new(Arc::clone(&store), ProjectStatus::Finished);

        let id = store.add_project("A", "a", 1);
        store.move_project(&id, ProjectStatus::Finished);
        store.move_project(&id, ProjectStatus::Finished);

        assert_eq!(active.render_count(), 2);
        assert_eq!(finished.render_count(), 2);
    }

    #[test]
    fn test_render_text() {
        let store = Arc::new(ProjectStore::new());
        let active = ProjectListView::new(Arc::clone(&store), ProjectStatus::Active);
        assert_eq!(active.render(), "ACTIVE PROJECTS\n  (none)\n");

        let id = store.add_project("Build API", "backend work", 3);
        let text = active.render();
        assert!(text.contains(&format!("  - Build API ({})", id)));
        assert!(text.contains("      3 persons assigned"));
        assert!(text.contains("      backend work"));
        assert!(text.contains("      created "));
    }

    #[test]
    fn test_heading() {
        let store = Arc::new(ProjectStore::new());
        let finished = ProjectListView::new(store, ProjectStatus::Finished);
        assert_eq!(finished.heading(), "FINISHED PROJECTS");
    }
}
