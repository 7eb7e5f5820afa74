//! Synchronization between address books.
//!
//! Address books never talk to each other directly. A book serializes its
//! entries into records, hands them to a [`SynchronizationProvider`], and
//! adopts whatever merged set the provider returns.
//!
//! - [`encode_entry`] / [`decode_entry`]: one string per entry
//! - [`merge_entries`]: pure, deterministic merge of record lists
//! - [`SynchronizationProvider`]: the exchange capability
//! - [`MemorySyncProvider`]: provider keeping the running merge in memory

mod error;
mod merge;
mod provider;
mod record;

pub use error::{SyncError, SyncResult};
pub(crate) use merge::decode_unique;
pub use merge::{merge_all, merge_entries, merge_entries_with, ConflictPolicy};
pub use provider::{MemorySyncProvider, SynchronizationProvider};
pub use record::{decode_entry, encode_entry, record_key, FIELD_SEPARATOR};
