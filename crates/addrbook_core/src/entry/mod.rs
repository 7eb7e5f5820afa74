//! Address book entries.
//!
//! An [`Entry`] holds a canonical name plus an optional phone number and
//! birthday. Names are normalized on the way in (see [`normalize`]) and
//! identified by their [`NameKey`].

mod name;
mod validate;

pub use name::{fold, is_word_separator, normalize, NameKey};
pub use validate::{
    days_in_month, validate_birthday, validate_name, validate_name_with_limit, validate_phone,
    MAX_NAME_LEN,
};

use crate::error::BookResult;
use serde::Serialize;
use std::fmt;

/// A phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Creates a phone number.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// Returns the raw number.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday as month and day, without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Birthday {
    month: u8,
    day: u8,
}

impl Birthday {
    /// Creates a birthday, validating the month/day pair.
    pub fn new(month: u8, day: u8) -> BookResult<Self> {
        validate_birthday(month, day)?;
        Ok(Self { month, day })
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// One contact in an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    phone_number: Option<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Entry {
    /// Creates an entry with no phone number or birthday.
    ///
    /// The name is normalized and checked against [`MAX_NAME_LEN`].
    pub fn new(raw_name: &str) -> BookResult<Self> {
        Self::with_name_limit(raw_name, MAX_NAME_LEN)
    }

    /// Creates an entry, checking the name against a custom length limit.
    pub fn with_name_limit(raw_name: &str, max_len: usize) -> BookResult<Self> {
        let name = normalize(raw_name);
        validate_name_with_limit(&name, max_len)?;
        Ok(Self {
            name,
            phone_number: None,
            birthday: None,
        })
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the case-insensitive key of this entry.
    #[must_use]
    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    /// Returns the phone number, if set.
    #[must_use]
    pub fn phone_number(&self) -> Option<PhoneNumber> {
        self.phone_number
    }

    /// Returns the birthday, if set.
    #[must_use]
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Sets the phone number, replacing any previous value.
    pub fn set_phone_number(&mut self, phone_number: PhoneNumber) {
        self.phone_number = Some(phone_number);
    }

    /// Sets the birthday, replacing any previous value.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Returns the number of characters in the canonical name.
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(phone) = self.phone_number {
            write!(f, ", phone {phone}")?;
        }
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday {birthday}")?;
        }
        Ok(())
    }
}
