//! Text views over the store.
//!
//! Views only read snapshots delivered by the store and call its public
//! operations; none of them mutates a project directly.

pub mod input;
pub mod item;
pub mod list;

pub use input::ProjectInput;
pub use item::ProjectItemView;
pub use list::ProjectListView;
