//! Ordered, append-only listener registry.
//!
//! Every listener gets its own freshly taken snapshot, so nothing one
//! listener does to its copy is visible to the next one or to the owner,
//! and a change made from inside one listener is seen by the ones after it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

/// Callback invoked with an owned snapshot after every change.
pub type Listener<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

/// Identifies one registration.
///
/// Handles are numbered in registration order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(u64);

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

struct Registration<T> {
    handle: ListenerHandle,
    callback: Listener<T>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Append-only list of listeners.
///
/// # Reentrancy
///
/// The registration list is copied out before any callback runs, so a
/// listener may register further listeners or trigger another
/// notification from inside its own call. Listeners added during a round
/// are first called in the next round.
pub struct ListenerRegistry<T> {
    next: AtomicU64,
    entries: RwLock<Vec<Registration<T>>>,
}

impl<T> ListenerRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Appends a listener. No de-duplication.
    pub fn register<F>(&self, callback: F) -> ListenerHandle
    where
        F: Fn(Vec<T>) + Send + Sync + 'static,
    {
        let handle = ListenerHandle(self.next.fetch_add(1, Ordering::SeqCst));
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration {
                handle,
                callback: Arc::new(callback),
            });
        handle
    }

    /// Calls every listener in registration order, on the calling thread,
    /// each with its own result of `snapshot`.
    ///
    /// `snapshot` runs once per listener, right before that listener, so a
    /// listener that changes the source is followed by listeners that see
    /// the change.
    ///
    /// Returns the number of listeners called.
    pub fn notify<S>(&self, snapshot: S) -> usize
    where
        S: Fn() -> Vec<T>,
    {
        let entries: Vec<Registration<T>> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for entry in &entries {
            let items = snapshot();
            trace!(listener = %entry.handle, items = items.len(), "Delivering snapshot");
            (entry.callback)(items);
        }

        entries.len()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .map(|e| e.len())
            .unwrap_or_else(|e| e.into_inner().len())
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
