//! Draggable source for a single project.

use tracing::trace;
use tracker_models::ProjectId;

use crate::payload::DragPayload;
use crate::protocol::Draggable;
use crate::transfer::{DataTransfer, EffectAllowed};

/// Puts one project id on the gesture and asks for a move.
///
/// The source never learns how the gesture ended; the drop target drives
/// the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSource {
    project_id: ProjectId,
}

impl ItemSource {
    pub fn new(project_id: ProjectId) -> Self {
        Self { project_id }
    }
}

impl Draggable for ItemSource {
    fn on_drag_start(&self, transfer: &mut DataTransfer) {
        DragPayload::plain(self.project_id.clone()).write(transfer);
        transfer.set_effect_allowed(EffectAllowed::Move);
        trace!(project_id = %self.project_id, "Drag started");
    }

    fn on_drag_end(&self, _transfer: &DataTransfer) {
        trace!(project_id = %self.project_id, "Drag ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_start_writes_plain_text_id() {
        let source = ItemSource::new(ProjectId::from("p1"));
        let mut transfer = DataTransfer::new();

        source.on_drag_start(&mut transfer);

        assert_eq!(transfer.types(), vec!["text/plain"]);
        assert_eq!(transfer.get_data("text/plain"), Some("p1"));
        assert_eq!(transfer.effect_allowed(), EffectAllowed::Move);
    }

    #[test]
    fn test_drag_end_leaves_transfer_untouched() {
        let source = ItemSource::new(ProjectId::from("p1"));
        let mut transfer = DataTransfer::new();
        source.on_drag_start(&mut transfer);
        let before = transfer.clone();

        source.on_drag_end(&transfer);

        assert_eq!(transfer, before);
    }
}
