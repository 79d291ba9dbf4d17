//! A single rendered project.

use tracker_dnd::{DataTransfer, Draggable, ItemSource};
use tracker_models::{Project, ProjectId};

/// One project as shown inside a bucket; can be picked up and dragged.
#[derive(Debug, Clone)]
pub struct ProjectItemView {
    project: Project,
    source: ItemSource,
}

impl ProjectItemView {
    pub fn new(project: Project) -> Self {
        let source = ItemSource::new(project.id.clone());
        Self { project, source }
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    /// Title, headcount, description and creation date, one per line.
    pub fn render(&self) -> Vec<String> {
        vec![
            self.project.title.clone(),
            format!("{} assigned", self.project.people_label()),
            self.project.description.clone(),
            format!("created {}", self.project.created_at.format("%Y-%m-%d")),
        ]
    }
}

impl Draggable for ProjectItemView {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        self.source.on_drag_start(transfer);
    }

    fn on_drag_end(&self, transfer: &DataTransfer) {
        self.source.on_drag_end(transfer);
    }
}
