//! Drag-and-drop handshake for moving projects between buckets.
//!
//! A gesture is four negotiated events between a draggable source and a
//! drop target:
//!
//! 1. pick-up: the source writes the project id into the transfer
//! 2. hover: the target inspects the declared kind and must call
//!    [`DragEvent::accept`] to take part
//! 3. leave: the target clears its "droppable" marker; hovering another
//!    target implies a leave from the previous one
//! 4. drop: delivered only to the target under the pointer, and only if it
//!    accepted that hover; the target asks its [`ProjectMover`] to change
//!    the status
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tracker_dnd::{BucketTarget, DragSession, DropOutcome, ItemSource};
//! use tracker_models::ProjectStatus;
//! use tracker_store::ProjectStore;
//!
//! let store = Arc::new(ProjectStore::new());
//! let id = store.add_project("Build API", "backend work", 3);
//!
//! let source = ItemSource::new(id.clone());
//! let mut finished = BucketTarget::new(Arc::clone(&store), ProjectStatus::Finished);
//!
//! let mut session = DragSession::start(&source);
//! assert!(session.hover(&mut finished));
//! assert_eq!(session.release(), DropOutcome::Delivered);
//!
//! assert_eq!(store.get(&id).unwrap().status, ProjectStatus::Finished);
//! ```

pub mod error;
pub mod mover;
pub mod payload;
pub mod protocol;
pub mod session;
pub mod source;
pub mod target;
pub mod transfer;

pub use error::{PayloadError, Result};
pub use mover::ProjectMover;
pub use payload::{DragPayload, PayloadKind};
pub use protocol::{DragEvent, DragTarget, Draggable};
pub use session::{DragSession, DropOutcome};
pub use source::ItemSource;
pub use target::BucketTarget;
pub use transfer::{DataTransfer, EffectAllowed};
