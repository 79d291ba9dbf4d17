//! One drag gesture, from pick-up to release or cancel.
//!
//! `DragSession` plays the platform's part. It owns the transfer and
//! tracks the one target under the pointer: hovering a new target first
//! sends a leave to the previous one, and a release goes to the current
//! target only, and only as a drop if that target accepted the hover.

use tracing::debug;

use crate::protocol::{DragEvent, DragTarget, Draggable};
use crate::transfer::DataTransfer;

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target under the pointer accepted the hover and received the drop.
    Delivered,
    /// Released over a target that did not accept; nothing delivered.
    Rejected,
    /// Released outside any target or aborted.
    Cancelled,
}

/// The target currently under the pointer and its answer to the hover.
struct Hovered<'t> {
    target: &'t mut dyn DragTarget,
    accepted: bool,
}

/// An in-flight gesture.
///
/// Consumed by [`DragSession::release`] or [`DragSession::cancel`]; both
/// finish by running the source's `on_drag_end`.
pub struct DragSession<'s, 't> {
    source: &'s dyn Draggable,
    transfer: DataTransfer,
    current: Option<Hovered<'t>>,
}

impl<'s, 't> DragSession<'s, 't> {
    /// Picks up `source`, letting it fill the transfer.
    pub fn start(source: &'s dyn Draggable) -> Self {
        let mut transfer = DataTransfer::new();
        source.on_drag_start(&mut transfer);
        debug!(types = ?transfer.types(), "Drag session started");

        Self {
            source,
            transfer,
            current: None,
        }
    }

    /// Gesture data as written by the source.
    pub fn transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Moves the pointer onto `target`, leaving whatever target it was
    /// over before. Returns whether `target` accepted.
    pub fn hover(&mut self, target: &'t mut dyn DragTarget) -> bool {
        self.leave();

        let mut event = DragEvent::new(&self.transfer);
        target.on_drag_over(&mut event);
        let accepted = event.is_accepted();

        self.current = Some(Hovered { target, accepted });
        accepted
    }

    /// Moves the pointer off the current target, if any.
    pub fn leave(&mut self) {
        if let Some(Hovered { target, .. }) = self.current.take() {
            target.on_drag_leave(&DragEvent::new(&self.transfer));
        }
    }

    /// Lets go wherever the pointer is.
    ///
    /// Only the current target can receive the drop, and only if it
    /// accepted the hover; otherwise it gets a leave. With no target under
    /// the pointer nothing is dispatched.
    pub fn release(mut self) -> DropOutcome {
        let outcome = match self.current.take() {
            Some(Hovered {
                target,
                accepted: true,
            }) => {
                target.on_drop(&DragEvent::new(&self.transfer));
                DropOutcome::Delivered
            }
            Some(Hovered { target, .. }) => {
                target.on_drag_leave(&DragEvent::new(&self.transfer));
                DropOutcome::Rejected
            }
            None => DropOutcome::Cancelled,
        };

        debug!(?outcome, "Drag session finished");
        self.source.on_drag_end(&self.transfer);
        outcome
    }

    /// Aborts the gesture; the current target, if any, gets a leave.
    pub fn cancel(mut self) -> DropOutcome {
        self.leave();
        debug!("Drag session cancelled");
        self.source.on_drag_end(&self.transfer);
        DropOutcome::Cancelled
    }
}
