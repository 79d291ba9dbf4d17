//! Drop target bound to one status bucket.

use tracing::{debug, warn};
use tracker_models::ProjectStatus;

use crate::mover::ProjectMover;
use crate::payload::{DragPayload, PayloadKind};
use crate::protocol::{DragEvent, DragTarget};

/// A bucket that accepts `text/plain` drags and moves the dropped project
/// into its own status.
///
/// The target sees nothing about the dragged item except its id.
#[derive(Debug)]
pub struct BucketTarget<M> {
    mover: M,
    status: ProjectStatus,
    droppable: bool,
}

impl<M: ProjectMover> BucketTarget<M> {
    pub fn new(mover: M, status: ProjectStatus) -> Self {
        Self {
            mover,
            status,
            droppable: false,
        }
    }

    /// The status this bucket assigns on drop.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Whether the "droppable" highlight is currently shown.
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }
}

impl<M: ProjectMover> DragTarget for BucketTarget<M> {
    fn on_drag_over(&mut self, event: &mut DragEvent<'_>) {
        if event.declares(PayloadKind::PlainText) {
            event.accept();
            self.droppable = true;
        } else {
            debug!(bucket = %self.status, types = ?event.data().types(), "Hover not accepted");
        }
    }

    fn on_drag_leave(&mut self, _event: &DragEvent<'_>) {
        // Always clear, even if the hover was never accepted.
        self.droppable = false;
    }

    fn on_drop(&mut self, event: &DragEvent<'_>) {
        self.droppable = false;

        match DragPayload::read(event.data()) {
            Ok(payload) => {
                let outcome = self.mover.move_project(&payload.id, self.status);
                debug!(project_id = %payload.id, bucket = %self.status, ?outcome, "Dropped");
            }
            Err(e) => warn!(bucket = %self.status, error = %e, "Ignoring malformed drop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::DataTransfer;
    use std::sync::Mutex;
    use tracker_models::ProjectId;
    use tracker_store::MoveOutcome;

    #[derive(Default)]
    struct RecordingMover {
        calls: Mutex<Vec<(ProjectId, ProjectStatus)>>,
    }

    impl ProjectMover for RecordingMover {
        fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> MoveOutcome {
            self.calls.lock().unwrap().push((id.clone(), status));
            MoveOutcome::Moved
        }
    }

    fn plain(id: &str) -> DataTransfer {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", id);
        transfer
    }

    #[test]
    fn test_hover_with_plain_text_is_accepted() {
        let mover = RecordingMover::default();
        let mut target = BucketTarget::new(&mover, ProjectStatus::Finished);
        let transfer = plain("p1");
        let mut event = DragEvent::new(&transfer);

        target.on_drag_over(&mut event);

        assert!(event.is_accepted());
        assert!(target.is_droppable());
        assert!(mover.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hover_with_other_kind_is_rejected() {
        let mover = RecordingMover::default();
        let mut target = BucketTarget::new(&mover, ProjectStatus::Finished);
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<b>p1</b>");
        let mut event = DragEvent::new(&transfer);

        target.on_drag_over(&mut event);

        assert!(!event.is_accepted());
        assert!(!target.is_droppable());
    }

    #[test]
    fn test_leave_clears_marker_unconditionally() {
        let mover = RecordingMover::default();
        let mut target = BucketTarget::new(&mover, ProjectStatus::Active);
        let transfer = plain("p1");

        // Leave without any prior hover.
        target.on_drag_leave(&DragEvent::new(&transfer));
        assert!(!target.is_droppable());

        target.on_drag_over(&mut DragEvent::new(&transfer));
        assert!(target.is_droppable());
        target.on_drag_leave(&DragEvent::new(&transfer));
        assert!(!target.is_droppable());
    }

    #[test]
    fn test_drop_moves_to_bucket_status() {
        let mover = RecordingMover::default();
        let mut target = BucketTarget::new(&mover, ProjectStatus::Finished);
        let transfer = plain("p1");

        target.on_drag_over(&mut DragEvent::new(&transfer));
        target.on_drop(&DragEvent::new(&transfer));

        assert_eq!(
            *mover.calls.lock().unwrap(),
            vec![(ProjectId::from("p1"), ProjectStatus::Finished)]
        );
        assert!(!target.is_droppable());
    }

    #[test]
    fn test_malformed_drop_is_ignored() {
        let mover = RecordingMover::default();
        let mut target = BucketTarget::new(&mover, ProjectStatus::Finished);

        target.on_drop(&DragEvent::new(&plain("")));
        target.on_drop(&DragEvent::new(&DataTransfer::new()));

        assert!(mover.calls.lock().unwrap().is_empty());
    }
}
