//! Integration tests for address books synchronizing through providers.

use addrbook_core::{
    AddressBook, Birthday, BookError, ConflictPolicy, MemorySyncProvider, PhoneNumber, SyncError,
    SyncResult, SynchronizationProvider,
};
use addrbook_testkit::fixtures::book_with;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

#[test]
fn second_book_receives_first_books_entries() {
    let mut ab1 = book_with(&["Jane Doe", "Daniel Vogel"]);
    let mut ab2 = AddressBook::new();
    let provider = MemorySyncProvider::new();

    ab1.synchronize(&provider).unwrap();
    ab2.synchronize(&provider).unwrap();

    assert_eq!(ab2.get_entries().len(), 2);
    for name in ["Jane Doe", "Daniel Vogel"] {
        assert!(ab1.has_entry(name));
        assert!(ab2.has_entry(name));
    }
}

#[test]
fn books_converge_after_second_round() {
    let mut a = book_with(&["Jane Doe"]);
    let mut b = book_with(&["Daniel Vogel"]);
    let provider = MemorySyncProvider::new();

    a.synchronize(&provider).unwrap();
    b.synchronize(&provider).unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);

    a.synchronize(&provider).unwrap();
    assert_eq!(a.get_entries(), b.get_entries());
    assert_eq!(a.serialize_entries(), provider.retained());
}

#[test]
fn resync_without_changes_is_a_no_op() {
    let mut book = book_with(&["Jane Doe", "Daniel Vogel"]);
    book.set_phone_number("Jane Doe", 123456789).unwrap();
    let provider = MemorySyncProvider::new();

    book.synchronize(&provider).unwrap();
    let before = book.serialize_entries();
    book.synchronize(&provider).unwrap();
    assert_eq!(book.serialize_entries(), before);
}

#[test]
fn fields_flow_between_books() {
    let mut a = book_with(&["Jane Doe"]);
    a.set_phone_number("Jane Doe", 123456789).unwrap();
    let mut b = book_with(&["jane doe"]);
    b.set_birthday("JANE DOE", 11, 12).unwrap();
    let provider = MemorySyncProvider::new();

    a.synchronize(&provider).unwrap();
    b.synchronize(&provider).unwrap();

    let entry = b.entry("Jane Doe").unwrap();
    assert_eq!(entry.phone_number(), Some(PhoneNumber::new(123456789)));
    assert_eq!(entry.birthday(), Some(Birthday::new(11, 12).unwrap()));
}

#[test]
fn caller_wins_conflicting_fields() {
    let mut a = book_with(&["Jane Doe"]);
    a.set_phone_number("Jane Doe", 111).unwrap();
    let mut b = book_with(&["Jane Doe"]);
    b.set_phone_number("Jane Doe", 222).unwrap();
    let provider = MemorySyncProvider::new().with_policy(ConflictPolicy::KeepFirst);

    a.synchronize(&provider).unwrap();
    b.synchronize(&provider).unwrap();
    assert_eq!(provider.retained(), vec!["Jane Doe|222|"]);

    a.set_birthday("Jane Doe", 11, 12).unwrap();
    a.synchronize(&provider).unwrap();
    assert_eq!(provider.retained(), vec!["Jane Doe|111|11-12"]);

    b.synchronize(&provider).unwrap();
    assert_eq!(
        b.entry("Jane Doe").unwrap().phone_number(),
        Some(PhoneNumber::new(222))
    );
    assert_eq!(b.entry("Jane Doe").unwrap().birthday(), None);
}

#[test]
fn local_removal_is_undone_by_retained_state() {
    let mut book = book_with(&["Jane Doe"]);
    let provider = MemorySyncProvider::new();
    book.synchronize(&provider).unwrap();

    book.remove_entry("Jane Doe").unwrap();
    book.synchronize(&provider).unwrap();
    assert!(book.has_entry("Jane Doe"));
}

/// A provider that answers with a fixed record list.
struct FixedProvider {
    response: Vec<String>,
    seen: Mutex<Vec<Vec<String>>>,
}

impl FixedProvider {
    fn new(response: &[&str]) -> Self {
        Self {
            response: response.iter().map(|s| (*s).to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl SynchronizationProvider for FixedProvider {
    fn synchronize(&self, serialized_entries: Vec<String>) -> SyncResult<Vec<String>> {
        self.seen.lock().push(serialized_entries);
        Ok(self.response.clone())
    }
}

#[test]
fn provider_sees_serialized_entries() {
    let mut book = book_with(&["Jane Doe"]);
    book.set_birthday("Jane Doe", 11, 12).unwrap();
    let provider = FixedProvider::new(&["Alice|5|"]);

    let outcome = book.synchronize(&provider).unwrap();
    assert_eq!((outcome.sent, outcome.received), (1, 1));
    assert_eq!(provider.seen.lock()[0], vec!["Jane Doe||11-12"]);
    assert_eq!(book.get_entries(), vec!["Alice"]);
}

#[test]
fn malformed_provider_response_fails_loudly() {
    let mut book = book_with(&["Jane Doe"]);
    let provider = FixedProvider::new(&["Alice|5|", "Bob|||"]);

    let result = book.synchronize(&provider);
    assert!(matches!(
        result,
        Err(BookError::Sync(SyncError::MalformedRecord { .. }))
    ));
    assert_eq!(book.get_entries(), vec!["Jane Doe"]);
}

#[test]
fn duplicate_provider_response_fails_loudly() {
    let mut book = AddressBook::new();
    let provider = FixedProvider::new(&["Alice||", "ALICE|1|"]);

    let result = book.synchronize(&provider);
    assert!(matches!(
        result,
        Err(BookError::Sync(SyncError::DuplicateRecord { .. }))
    ));
    assert!(book.is_empty());
}

#[test]
fn shared_provider_across_threads() {
    let provider = Arc::new(MemorySyncProvider::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                let mut book = AddressBook::new();
                book.add_entry(&format!("contact {i}")).unwrap();
                book.synchronize(&provider).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut late = AddressBook::new();
    late.synchronize(&provider).unwrap();
    assert_eq!(
        late.get_entries(),
        vec!["Contact 0", "Contact 1", "Contact 2", "Contact 3"]
    );
}
