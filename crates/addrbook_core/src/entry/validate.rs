//! Entry field validation.

use crate::entry::PhoneNumber;
use crate::error::{BookError, BookResult};

/// Maximum name length in characters, inclusive.
pub const MAX_NAME_LEN: usize = 100;

/// Days per month. February allows 29 since a birthday carries no year.
const DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Validates a name against [`MAX_NAME_LEN`].
pub fn validate_name(name: &str) -> BookResult<()> {
    validate_name_with_limit(name, MAX_NAME_LEN)
}

/// Validates a name against a custom maximum length.
///
/// Length is counted in characters, not bytes. Only the empty string is
/// rejected for content: a name made entirely of whitespace, such as `" "`,
/// is valid and is stored unchanged, since whitespace has no uppercase form.
pub fn validate_name_with_limit(name: &str, max_len: usize) -> BookResult<()> {
    if name.is_empty() {
        return Err(BookError::invalid_name("name is empty"));
    }
    let len = name.chars().count();
    if len > max_len {
        return Err(BookError::invalid_name(format!(
            "name is {len} characters, maximum is {max_len}"
        )));
    }
    Ok(())
}

/// Returns the number of days in a month, or `None` if `month` is not 1-12.
#[must_use]
pub fn days_in_month(month: u8) -> Option<u8> {
    let index = usize::from(month).checked_sub(1)?;
    DAYS_IN_MONTH.get(index).copied()
}

/// Validates a month/day pair.
pub fn validate_birthday(month: u8, day: u8) -> BookResult<()> {
    match days_in_month(month) {
        Some(max_day) if (1..=max_day).contains(&day) => Ok(()),
        _ => Err(BookError::invalid_date(month, day)),
    }
}

/// Validates a phone number.
///
/// Every non-negative integer is accepted; no length or format rules apply.
pub fn validate_phone(number: u64) -> BookResult<PhoneNumber> {
    Ok(PhoneNumber::new(number))
}
