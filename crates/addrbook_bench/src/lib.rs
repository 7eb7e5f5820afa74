//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use addrbook_core::{encode_entry, Birthday, Entry, PhoneNumber};
use rand::Rng;
use std::collections::HashSet;

fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(3..10);
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

/// Generate a random two-word name.
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", random_word(rng), random_word(rng))
}

/// Generate a random entry with phone number and birthday.
pub fn random_entry<R: Rng>(rng: &mut R) -> Entry {
    let mut entry = Entry::new(&random_name(rng)).expect("generated names are valid");
    entry.set_phone_number(PhoneNumber::new(rng.gen()));
    let birthday = Birthday::new(rng.gen_range(1..=12), rng.gen_range(1..=28))
        .expect("generated dates are valid");
    entry.set_birthday(birthday);
    entry
}

/// Generate a record list of the given length with no repeated name.
pub fn generate_records(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut seen = HashSet::with_capacity(count);
    let mut records = Vec::with_capacity(count);
    while records.len() < count {
        let entry = random_entry(&mut rng);
        if seen.insert(entry.key()) {
            records.push(encode_entry(&entry));
        }
    }
    records
}

/// Generate two record lists sharing roughly `overlap` percent of their names.
pub fn overlapping_records(count: usize, overlap: usize) -> (Vec<String>, Vec<String>) {
    let left = generate_records(count);
    let shared = count * overlap / 100;
    let mut right: Vec<String> = left[..shared].to_vec();
    right.extend(generate_records(count - shared));
    (left, right)
}
