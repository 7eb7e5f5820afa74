//! Address book configuration.

use crate::entry::MAX_NAME_LEN;

/// Configuration for an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Maximum name length in characters, inclusive.
    pub max_name_len: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            max_name_len: MAX_NAME_LEN,
        }
    }
}

impl BookConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum name length.
    #[must_use]
    pub const fn max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BookConfig::default();
        assert_eq!(config.max_name_len, 100);
    }

    #[test]
    fn builder_pattern() {
        let config = BookConfig::new().max_name_len(20);
        assert_eq!(config.max_name_len, 20);
    }
}
