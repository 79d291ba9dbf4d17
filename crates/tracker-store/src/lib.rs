//! Observable in-memory project store.
//!
//! This crate provides the `ProjectStore`, the single writer of the
//! project collection:
//! - Shared read/write access through `RwLock`
//! - Synchronous fan-out of full snapshots to listeners, in
//!   registration order
//! - Status transitions with silent no-ops for unknown ids and
//!   unchanged statuses
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tracker_models::ProjectStatus;
//! use tracker_store::{ProjectFilter, ProjectStore};
//!
//! let store = Arc::new(ProjectStore::new());
//!
//! store.add_listener(|projects| {
//!     println!("{} project(s)", projects.len());
//! });
//!
//! let id = store.add_project("Build API", "backend work", 3);
//! store.move_project(&id, ProjectStatus::Finished);
//!
//! let finished = store.list(&ProjectFilter::new().with_status(ProjectStatus::Finished));
//! assert_eq!(finished.len(), 1);
//! ```

pub mod filter;
pub mod listeners;
pub mod store;

pub use filter::ProjectFilter;
pub use listeners::{Listener, ListenerHandle, ListenerRegistry};
pub use store::{MoveOutcome, ProjectStore};
