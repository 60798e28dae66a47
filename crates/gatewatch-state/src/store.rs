//! The gate store — atomic snapshot read/replace.

use std::sync::{Arc, RwLock};

use crate::types::GateSnapshot;

/// Holds the current `GateSnapshot` behind a read-write lock.
///
/// Readers take the read path and clone the snapshot out; they never
/// serialize against each other. `replace` takes the write path and
/// swaps the whole value, so a concurrent reader sees either the old
/// snapshot in full or the new one in full. A poisoned lock (a reader
/// or writer panicked mid-section) is recovered rather than propagated;
/// the snapshot is always a complete value, so the data stays sound.
#[derive(Debug, Clone)]
pub struct GateStore {
    inner: Arc<RwLock<GateSnapshot>>,
}

impl GateStore {
    /// Create a store with the gate closed and no history.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GateSnapshot::closed())),
        }
    }

    /// Read the current snapshot. Never blocks beyond the writer's
    /// short critical section.
    pub fn read(&self) -> GateSnapshot {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the current snapshot wholesale.
    pub fn replace(&self, snapshot: GateSnapshot) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = snapshot;
    }
}

impl Default for GateStore {
    fn default() -> Self {
        Self::new()
    }
}
