//! Error types for address book operations.

use crate::sync::SyncError;
use thiserror::Error;

/// Result type for address book operations.
pub type BookResult<T> = Result<T, BookError>;

/// Errors that can occur in address book operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Name is empty or longer than the allowed maximum.
    #[error("invalid name: {reason}")]
    InvalidName {
        /// Why the name was rejected.
        reason: String,
    },

    /// Month or day out of range.
    #[error("invalid date: month {month}, day {day}")]
    InvalidDate {
        /// Month as given.
        month: u8,
        /// Day as given.
        day: u8,
    },

    /// No entry exists for the name.
    #[error("entry not found: {name}")]
    EntryNotFound {
        /// Name as given by the caller.
        name: String,
    },

    /// An entry with the same folded name already exists.
    #[error("duplicate entry: {name}")]
    DuplicateEntry {
        /// Canonical name of the existing entry.
        name: String,
    },

    /// Synchronization failed.
    #[error("sync error: {0}")]
    Sync(#[from] SyncError),
}

impl BookError {
    /// Creates an invalid name error.
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(month: u8, day: u8) -> Self {
        Self::InvalidDate { month, day }
    }

    /// Creates an entry not found error.
    pub fn entry_not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound { name: name.into() }
    }

    /// Creates a duplicate entry error.
    pub fn duplicate_entry(name: impl Into<String>) -> Self {
        Self::DuplicateEntry { name: name.into() }
    }
}
