//! Last poll result shared between the poller and the read API
//!
//! The three fields (records, timestamp, last error) are only ever replaced
//! together under the write lock. Readers take the read lock and walk away
//! with a clone, so a reader never sees a new record list paired with an old
//! timestamp.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

/// Committed state of the most recent poll
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// Last successfully filtered records, in document order
    pub nodes: Vec<String>,
    /// When the last poll finished, `None` before the first one
    pub updated_at: Option<DateTime<Utc>>,
    /// Error text of the last poll, empty when it succeeded
    pub last_error: String,
}

impl NodeSnapshot {
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.last_error.is_empty()
    }
}

/// Reader/writer guarded [`NodeSnapshot`]
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: RwLock<NodeSnapshot>,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot.
    ///
    /// `error: None` stores an empty error string.
    pub fn set(&self, nodes: Vec<String>, updated_at: DateTime<Utc>, error: Option<String>) {
        let next = NodeSnapshot {
            nodes,
            updated_at: Some(updated_at),
            last_error: error.unwrap_or_default(),
        };
        *self.inner.write() = next;
    }

    /// Commit a successful poll
    pub fn record_success(&self, nodes: Vec<String>, updated_at: DateTime<Utc>) {
        self.set(nodes, updated_at, None);
    }

    /// Commit a failed poll, keeping the previous record list in place
    pub fn record_failure(&self, updated_at: DateTime<Utc>, error: impl Into<String>) {
        let mut guard = self.inner.write();
        guard.updated_at = Some(updated_at);
        guard.last_error = error.into();
    }

    /// Defensive copy of the current snapshot
    #[must_use]
    pub fn snapshot(&self) -> NodeSnapshot {
        self.inner.read().clone()
    }
}
