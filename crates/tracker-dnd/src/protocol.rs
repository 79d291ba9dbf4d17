//! The two roles of a drag gesture and the event they exchange.

use crate::payload::PayloadKind;
use crate::transfer::DataTransfer;

/// One event dispatched to a drop target.
///
/// While hovering, a target takes part in the gesture only by calling
/// [`DragEvent::accept`]. An event that is never accepted is a rejection.
#[derive(Debug)]
pub struct DragEvent<'a> {
    data: &'a DataTransfer,
    accepted: bool,
}

impl<'a> DragEvent<'a> {
    /// Wraps the gesture's transfer.
    pub fn new(data: &'a DataTransfer) -> Self {
        Self {
            data,
            accepted: false,
        }
    }

    /// Gesture data.
    pub fn data(&self) -> &DataTransfer {
        self.data
    }

    /// Returns true if the first declared kind is `kind`.
    pub fn declares(&self, kind: PayloadKind) -> bool {
        self.data.types().first() == Some(&kind.mime())
    }

    /// Accepts the hover, overriding the platform's default rejection.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Returns true if the target accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Something the user can pick up.
pub trait Draggable {
    /// Attaches gesture data when the drag begins.
    fn on_drag_start(&self, transfer: &mut DataTransfer);

    /// Called when the gesture ends, whether or not anything was dropped.
    fn on_drag_end(&self, transfer: &DataTransfer);
}

/// A region that can receive drops.
pub trait DragTarget {
    /// Hover over the target. Call `event.accept()` to allow a drop.
    fn on_drag_over(&mut self, event: &mut DragEvent<'_>);

    /// Pointer left the target.
    fn on_drag_leave(&mut self, event: &DragEvent<'_>);

    /// Payload released over the target after an accepted hover.
    fn on_drop(&mut self, event: &DragEvent<'_>);
}
