//! # Addrbook Testkit
//!
//! Test utilities for Addrbook.
//!
//! This crate provides:
//! - Fixtures for commonly used address books and record lists
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use addrbook_testkit::prelude::*;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn names_round_trip(name in valid_name_strategy()) {
//!         let book = book_with(&[&name]);
//!         prop_assert!(book.has_entry(&name));
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
