//! The address book store.

use crate::config::BookConfig;
use crate::entry::{validate_phone, Birthday, Entry, NameKey};
use crate::error::{BookError, BookResult};
use crate::sync::{decode_unique, encode_entry, SynchronizationProvider};
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

/// Result of a synchronization round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Records handed to the provider.
    pub sent: usize,
    /// Records adopted from the provider.
    pub received: usize,
}

/// An in-memory address book.
///
/// Entries are keyed by their folded name, so every lookup is
/// case-insensitive and listings come out sorted. Mutations take
/// `&mut self`; sharing one book between threads is not supported.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: BTreeMap<NameKey, Entry>,
    config: BookConfig,
}

impl AddressBook {
    /// Creates an empty address book with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty address book with the given configuration.
    #[must_use]
    pub fn with_config(config: BookConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Adds an entry with no phone number or birthday.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name is empty or too long
    /// - `DuplicateEntry` if a name with the same folded form exists
    pub fn add_entry(&mut self, raw_name: &str) -> BookResult<()> {
        let entry = Entry::with_name_limit(raw_name, self.config.max_name_len)?;
        match self.entries.entry(entry.key()) {
            btree_map::Entry::Occupied(existing) => {
                Err(BookError::duplicate_entry(existing.get().name()))
            }
            btree_map::Entry::Vacant(slot) => {
                debug!(name = entry.name(), "entry added");
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Removes an entry and returns it.
    ///
    /// # Errors
    ///
    /// `EntryNotFound` if no entry matches the name.
    pub fn remove_entry(&mut self, raw_name: &str) -> BookResult<Entry> {
        let entry = self
            .entries
            .remove(&NameKey::new(raw_name))
            .ok_or_else(|| BookError::entry_not_found(raw_name))?;
        debug!(name = entry.name(), "entry removed");
        Ok(entry)
    }

    /// Returns true if an entry matches the name in any casing.
    #[must_use]
    pub fn has_entry(&self, raw_name: &str) -> bool {
        self.entries.contains_key(&NameKey::new(raw_name))
    }

    /// Looks up an entry by name in any casing.
    #[must_use]
    pub fn entry(&self, raw_name: &str) -> Option<&Entry> {
        self.entries.get(&NameKey::new(raw_name))
    }

    /// Returns the canonical names of all entries, sorted case-insensitively.
    #[must_use]
    pub fn get_entries(&self) -> Vec<String> {
        self.entries.values().map(|e| e.name().to_string()).collect()
    }

    /// Iterates over entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the book has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the phone number of an existing entry.
    ///
    /// # Errors
    ///
    /// `EntryNotFound` if no entry matches the name.
    pub fn set_phone_number(&mut self, raw_name: &str, number: u64) -> BookResult<()> {
        let entry = self.entry_mut(raw_name)?;
        let phone = validate_phone(number)?;
        entry.set_phone_number(phone);
        debug!(name = entry.name(), "phone number set");
        Ok(())
    }

    /// Sets the birthday of an existing entry.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if no entry matches the name (checked first)
    /// - `InvalidDate` if the month/day pair is out of range
    pub fn set_birthday(&mut self, raw_name: &str, month: u8, day: u8) -> BookResult<()> {
        let entry = self.entry_mut(raw_name)?;
        let birthday = Birthday::new(month, day)?;
        entry.set_birthday(birthday);
        debug!(name = entry.name(), %birthday, "birthday set");
        Ok(())
    }

    /// Serializes every entry, in sorted order.
    #[must_use]
    pub fn serialize_entries(&self) -> Vec<String> {
        self.entries.values().map(encode_entry).collect()
    }

    /// Replaces all entries with the given records.
    ///
    /// Every record is decoded and checked before anything changes; on error
    /// the book keeps its previous entries. Returns the new entry count.
    ///
    /// # Errors
    ///
    /// - `Sync(MalformedRecord)` for a record that does not decode
    /// - `Sync(DuplicateRecord)` if two records share a folded name
    /// - `InvalidName` if a name exceeds the configured maximum length
    pub fn replace_entries(&mut self, records: &[String]) -> BookResult<usize> {
        let entries = decode_unique(records)?;
        let max_len = self.config.max_name_len;
        if let Some(entry) = entries.values().find(|e| e.name_len() > max_len) {
            return Err(BookError::invalid_name(format!(
                "{:?} is {} characters, maximum is {max_len}",
                entry.name(),
                entry.name_len()
            )));
        }
        self.entries = entries;
        Ok(self.entries.len())
    }

    /// Synchronizes with a provider.
    ///
    /// Hands the provider every entry, then adopts the merged set it returns
    /// as the complete new state of this book.
    ///
    /// # Errors
    ///
    /// Provider failures and invalid responses; the book is left unchanged.
    pub fn synchronize<P>(&mut self, provider: &P) -> BookResult<SyncOutcome>
    where
        P: SynchronizationProvider + ?Sized,
    {
        let outgoing = self.serialize_entries();
        let sent = outgoing.len();
        let merged = provider.synchronize(outgoing)?;
        let received = self.replace_entries(&merged)?;
        debug!(sent, received, "address book synchronized");
        Ok(SyncOutcome { sent, received })
    }

    fn entry_mut(&mut self, raw_name: &str) -> BookResult<&mut Entry> {
        self.entries
            .get_mut(&NameKey::new(raw_name))
            .ok_or_else(|| BookError::entry_not_found(raw_name))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Entry;
    type IntoIter = btree_map::Values<'a, NameKey, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
