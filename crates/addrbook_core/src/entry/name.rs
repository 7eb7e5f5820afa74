//! Name normalization and case-insensitive name keys.

use std::fmt;

/// Returns the canonical display form of a name.
///
/// Every character at position 0 or directly after an ASCII whitespace
/// character (vertical tab included) is uppercased. All other characters, whitespace included, pass through
/// unchanged: interior capitals stay capital.
///
/// ```
/// use addrbook_core::normalize;
///
/// assert_eq!(normalize("daniel abc HIJ kLm"), "Daniel Abc HIJ KLm");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if at_word_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

/// Returns true if `c` ends a word: any ASCII whitespace, vertical tab included.
#[must_use]
pub fn is_word_separator(c: char) -> bool {
    c.is_ascii() && c.is_whitespace()
}

/// Returns the case-insensitive comparison form of a name.
#[must_use]
pub fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Case-insensitive identity of an entry.
///
/// Two names map to the same key iff they are equal after ASCII case
/// folding. Keys order entries in listings and merge output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// Creates the key for a name in any casing.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(fold(name))
    }

    /// Returns the folded name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
