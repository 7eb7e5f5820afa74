//! Test fixtures.
//!
//! Ready-made address books and record lists for common scenarios.

use addrbook_core::AddressBook;

/// Creates an address book holding the given names.
///
/// # Panics
///
/// Panics if a name is rejected by the book.
#[must_use]
pub fn book_with(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for name in names {
        book.add_entry(name)
            .unwrap_or_else(|e| panic!("fixture name {name:?} rejected: {e}"));
    }
    book
}

/// The two-contact book used by the basic synchronization scenario.
#[must_use]
pub fn jane_and_daniel() -> AddressBook {
    book_with(&["Jane Doe", "Daniel Vogel"])
}

/// Converts string slices into an owned record list.
#[must_use]
pub fn records(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
