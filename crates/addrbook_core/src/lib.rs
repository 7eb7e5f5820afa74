//! # Addrbook Core
//!
//! In-memory address book for Addrbook.
//!
//! This crate provides:
//! - Name normalization and case-insensitive name keys
//! - Validation for names, birthdays and phone numbers
//! - `AddressBook` for adding, updating, removing and listing entries
//! - The serialized entry record format used for synchronization
//! - A deterministic merge over serialized entry lists
//! - The `SynchronizationProvider` capability and an in-memory provider
//!
//! ## Key Invariants
//!
//! - Entries are unique by folded (case-insensitive) name
//! - Entry listings are always sorted by folded name
//! - Merging is pure and deterministic
//! - Synchronization replaces the local entry set in one step
//!
//! ## Usage
//!
//! ```
//! use addrbook_core::{AddressBook, MemorySyncProvider};
//!
//! let mut alice = AddressBook::new();
//! alice.add_entry("jane doe").unwrap();
//! alice.set_phone_number("JANE DOE", 123456789).unwrap();
//!
//! let provider = MemorySyncProvider::new();
//! let mut bob = AddressBook::new();
//! alice.synchronize(&provider).unwrap();
//! bob.synchronize(&provider).unwrap();
//!
//! assert_eq!(bob.get_entries(), vec!["Jane Doe".to_string()]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod config;
mod entry;
mod error;
mod sync;

pub use book::{AddressBook, SyncOutcome};
pub use config::BookConfig;
pub use entry::{
    days_in_month, fold, is_word_separator, normalize, validate_birthday, validate_name,
    validate_name_with_limit, validate_phone, Birthday, Entry, NameKey, PhoneNumber,
    MAX_NAME_LEN,
};
pub use error::{BookError, BookResult};
pub use sync::{
    decode_entry, encode_entry, merge_all, merge_entries, merge_entries_with, record_key,
    ConflictPolicy, MemorySyncProvider, SyncError, SyncResult, SynchronizationProvider,
    FIELD_SEPARATOR,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
