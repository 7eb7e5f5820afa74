//! Merging of serialized entry lists.
//!
//! Records are keyed by their folded name. Keys present in one input pass
//! through; keys present in several are combined by a [`ConflictPolicy`],
//! always preferring the record that came first (earlier list, then earlier
//! position within a list). Output is re-encoded and sorted by key, so the
//! result depends only on the inputs.

use crate::entry::{Entry, NameKey};
use crate::sync::error::{SyncError, SyncResult};
use crate::sync::record::{decode_entry, encode_entry};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// Policy for combining two records that share a name key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Keep the preferred record and fill its absent fields from the other.
    #[default]
    FieldUnion,
    /// Keep the preferred record whole.
    KeepFirst,
}

impl ConflictPolicy {
    /// Combines `other` into `preferred` according to this policy.
    pub fn resolve(&self, preferred: &mut Entry, other: Entry) {
        match self {
            ConflictPolicy::FieldUnion => {
                if preferred.phone_number().is_none() {
                    if let Some(phone) = other.phone_number() {
                        preferred.set_phone_number(phone);
                    }
                }
                if preferred.birthday().is_none() {
                    if let Some(birthday) = other.birthday() {
                        preferred.set_birthday(birthday);
                    }
                }
            }
            ConflictPolicy::KeepFirst => {}
        }
    }

    /// Returns the policy name as used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::FieldUnion => "field-union",
            ConflictPolicy::KeepFirst => "keep-first",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field-union" => Ok(ConflictPolicy::FieldUnion),
            "keep-first" => Ok(ConflictPolicy::KeepFirst),
            other => Err(format!(
                "unknown conflict policy {other:?} (expected field-union or keep-first)"
            )),
        }
    }
}

/// Merges two record lists with the default policy.
///
/// `first` is preferred on conflicts.
///
/// ```
/// use addrbook_core::merge_entries;
///
/// let local = vec!["Jane Doe|123|".to_string()];
/// let remote = vec!["jane doe||11-12".to_string(), "Daniel Vogel||".to_string()];
/// let merged = merge_entries(&local, &remote).unwrap();
/// assert_eq!(merged, vec!["Daniel Vogel||", "Jane Doe|123|11-12"]);
/// ```
pub fn merge_entries(first: &[String], second: &[String]) -> SyncResult<Vec<String>> {
    merge_entries_with(first, second, ConflictPolicy::default())
}

/// Merges two record lists with an explicit policy.
pub fn merge_entries_with(
    first: &[String],
    second: &[String],
    policy: ConflictPolicy,
) -> SyncResult<Vec<String>> {
    merge_all([first, second], policy)
}

/// Merges any number of record lists, earlier lists preferred.
pub fn merge_all<'a, I>(lists: I, policy: ConflictPolicy) -> SyncResult<Vec<String>>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut merged: BTreeMap<NameKey, Entry> = BTreeMap::new();
    for list in lists {
        for record in list {
            let entry = decode_entry(record)?;
            match merged.entry(entry.key()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    policy.resolve(slot.get_mut(), entry);
                }
            }
        }
    }
    tracing::trace!(entries = merged.len(), %policy, "merged record lists");
    Ok(merged.values().map(encode_entry).collect())
}

/// Decodes a merged record list, rejecting repeated keys.
pub(crate) fn decode_unique(records: &[String]) -> SyncResult<BTreeMap<NameKey, Entry>> {
    let mut entries = BTreeMap::new();
    for record in records {
        let entry = decode_entry(record)?;
        match entries.entry(entry.key()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            btree_map::Entry::Occupied(slot) => {
                return Err(SyncError::duplicate(slot.key().as_str()));
            }
        }
    }
    Ok(entries)
}
