//! Synchronization provider capability.

use crate::sync::error::SyncResult;
use crate::sync::merge::{merge_entries_with, ConflictPolicy};
use parking_lot::Mutex;
use std::sync::Arc;

/// An exchange point between an address book and other sources of entries.
///
/// A provider receives the caller's serialized entries and returns the
/// complete set the caller should adopt. It may retain state across calls,
/// which is how several address books converge through one provider.
///
/// This trait abstracts the transport, allowing for different
/// implementations (in-memory, file-backed, networked).
pub trait SynchronizationProvider: Send + Sync {
    /// Exchanges the caller's records for the authoritative merged set.
    fn synchronize(&self, serialized_entries: Vec<String>) -> SyncResult<Vec<String>>;
}

impl<P: SynchronizationProvider + ?Sized> SynchronizationProvider for Arc<P> {
    fn synchronize(&self, serialized_entries: Vec<String>) -> SyncResult<Vec<String>> {
        (**self).synchronize(serialized_entries)
    }
}

/// A provider that keeps the running merged set in memory.
///
/// Every call merges the caller's records with the retained set, stores the
/// result and returns it. The caller's records are preferred on conflicts,
/// so the most recent writer wins.
///
/// # Thread Safety
///
/// The retained set sits behind a mutex; one provider can be shared by any
/// number of address books.
///
/// # Example
///
/// ```rust
/// use addrbook_core::{MemorySyncProvider, SynchronizationProvider};
///
/// let provider = MemorySyncProvider::new();
/// provider.synchronize(vec!["Jane Doe||".into()]).unwrap();
/// let merged = provider.synchronize(vec!["Daniel Vogel||".into()]).unwrap();
/// assert_eq!(merged, vec!["Daniel Vogel||", "Jane Doe||"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySyncProvider {
    retained: Mutex<Vec<String>>,
    policy: ConflictPolicy,
}

impl MemorySyncProvider {
    /// Creates a provider with an empty retained set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider seeded with existing records.
    ///
    /// The seed is merged like any other input on the first call.
    #[must_use]
    pub fn with_retained(records: Vec<String>) -> Self {
        Self {
            retained: Mutex::new(records),
            policy: ConflictPolicy::default(),
        }
    }

    /// Sets the conflict policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the conflict policy.
    #[must_use]
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Returns a copy of the retained records.
    #[must_use]
    pub fn retained(&self) -> Vec<String> {
        self.retained.lock().clone()
    }

    /// Returns the number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.retained.lock().len()
    }

    /// Returns true if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retained.lock().is_empty()
    }

    /// Drops every retained record.
    pub fn clear(&self) {
        self.retained.lock().clear();
    }
}

impl SynchronizationProvider for MemorySyncProvider {
    fn synchronize(&self, serialized_entries: Vec<String>) -> SyncResult<Vec<String>> {
        let mut retained = self.retained.lock();
        let merged = merge_entries_with(&serialized_entries, &retained, self.policy)?;
        tracing::debug!(
            incoming = serialized_entries.len(),
            merged = merged.len(),
            "memory provider synchronized"
        );
        retained.clone_from(&merged);
        Ok(merged)
    }
}
