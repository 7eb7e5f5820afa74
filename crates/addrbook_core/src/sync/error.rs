//! Error types for synchronization.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while merging or exchanging records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// A serialized record could not be decoded.
    #[error("malformed record {record:?}: {message}")]
    MalformedRecord {
        /// The offending record.
        record: String,
        /// What is wrong with it.
        message: String,
    },

    /// A merged set holds the same name key more than once.
    #[error("duplicate record for {key:?}")]
    DuplicateRecord {
        /// The folded name.
        key: String,
    },

    /// The provider failed to produce a merged set.
    #[error("provider error: {0}")]
    Provider(String),
}

impl SyncError {
    /// Creates a malformed record error.
    pub fn malformed(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate record error.
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateRecord { key: key.into() }
    }

    /// Creates a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}
