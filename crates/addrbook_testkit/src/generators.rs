//! Property-based test generators using proptest.
//!
//! Provides strategies for generating names, entries, record lists and
//! address book operations that maintain the required invariants.

use addrbook_core::{days_in_month, encode_entry, Birthday, Entry, PhoneNumber, MAX_NAME_LEN};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for generating valid names (1 to `MAX_NAME_LEN` characters).
///
/// Words are separated by any ASCII whitespace, not only spaces.
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!(
        r"[a-zA-Z][a-zA-Z .'\t\n\x0B\x0C-]{{0,{}}}",
        MAX_NAME_LEN - 1
    ))
    .expect("Invalid regex")
}

/// Strategy for generating short, collision-prone names.
///
/// Useful when tests need the same name to come up more than once.
pub fn short_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,2}( [a-cA-C]{1,2})?").expect("Invalid regex")
}

/// Strategy for generating names longer than `MAX_NAME_LEN`.
pub fn too_long_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!(
        "[a-zA-Z ]{{{},{}}}",
        MAX_NAME_LEN + 1,
        MAX_NAME_LEN + 50
    ))
    .expect("Invalid regex")
}

/// Strategy for generating names containing record separator and escape characters.
pub fn awkward_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z][a-z|\\\r\n -]{0,30}").expect("Invalid regex")
}

/// Strategy for generating valid birthdays.
pub fn birthday_strategy() -> impl Strategy<Value = Birthday> {
    (1u8..=12)
        .prop_flat_map(|month| (Just(month), 1..=days_in_month(month).unwrap_or(28)))
        .prop_map(|(month, day)| Birthday::new(month, day).expect("generated a valid date"))
}

/// Strategy for generating invalid month/day pairs.
pub fn invalid_birthday_strategy() -> impl Strategy<Value = (u8, u8)> {
    prop_oneof![
        any::<u8>().prop_map(|day| (0, day)),
        (13u8..=u8::MAX, any::<u8>()),
        (1u8..=12).prop_map(|month| (month, 0)),
        (1u8..=12).prop_flat_map(|month| {
            let max_day = days_in_month(month).unwrap_or(31);
            (Just(month), (max_day + 1)..=u8::MAX)
        }),
    ]
}

/// Strategy for generating entries with optional phone and birthday.
pub fn entry_strategy() -> impl Strategy<Value = Entry> {
    entry_with_names(valid_name_strategy())
}

/// Strategy for generating entries whose names often collide.
pub fn colliding_entry_strategy() -> impl Strategy<Value = Entry> {
    entry_with_names(short_name_strategy())
}

fn entry_with_names(
    names: impl Strategy<Value = String>,
) -> impl Strategy<Value = Entry> {
    (
        names,
        prop::option::of(any::<u64>()),
        prop::option::of(birthday_strategy()),
    )
        .prop_map(|(name, phone, birthday)| {
            let mut entry = Entry::new(&name).expect("generated a valid name");
            if let Some(phone) = phone {
                entry.set_phone_number(PhoneNumber::new(phone));
            }
            if let Some(birthday) = birthday {
                entry.set_birthday(birthday);
            }
            entry
        })
}

/// Strategy for generating record lists; names may repeat across lists.
pub fn record_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(colliding_entry_strategy(), 0..max_len)
        .prop_map(|entries| entries.iter().map(encode_entry).collect())
}

/// Strategy for generating two record lists with no name in common.
pub fn disjoint_record_lists_strategy(
    max_len: usize,
) -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec((entry_strategy(), any::<bool>()), 0..max_len).prop_map(|items| {
        let mut seen = BTreeSet::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (entry, goes_left) in items {
            if !seen.insert(entry.key()) {
                continue;
            }
            if goes_left {
                left.push(encode_entry(&entry));
            } else {
                right.push(encode_entry(&entry));
            }
        }
        (left, right)
    })
}

/// An operation against an address book.
#[derive(Debug, Clone)]
pub enum BookOperation {
    /// Add an entry
    Add {
        /// Raw name
        name: String,
    },
    /// Remove an entry
    Remove {
        /// Raw name
        name: String,
    },
}

/// Strategy for generating address book operations.
pub fn book_operation_strategy() -> impl Strategy<Value = BookOperation> {
    prop_oneof![
        3 => short_name_strategy().prop_map(|name| BookOperation::Add { name }),
        1 => short_name_strategy().prop_map(|name| BookOperation::Remove { name }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<BookOperation>> {
    prop::collection::vec(book_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_core::{validate_birthday, validate_name};

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn valid_names_validate(name in valid_name_strategy()) {
            prop_assert!(validate_name(&name).is_ok());
        }

        #[test]
        fn long_names_are_long(name in too_long_name_strategy()) {
            prop_assert!(name.chars().count() > MAX_NAME_LEN);
        }

        #[test]
        fn invalid_birthdays_are_invalid((month, day) in invalid_birthday_strategy()) {
            prop_assert!(validate_birthday(month, day).is_err());
        }

        #[test]
        fn disjoint_lists_share_no_key((left, right) in disjoint_record_lists_strategy(16)) {
            let left_keys: BTreeSet<_> = left
                .iter()
                .map(|r| addrbook_core::record_key(r).unwrap())
                .collect();
            for record in &right {
                prop_assert!(!left_keys.contains(&addrbook_core::record_key(record).unwrap()));
            }
        }
    }
}
