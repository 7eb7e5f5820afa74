//! Serialized entry records.
//!
//! Each entry travels as a single string of three `|`-separated fields:
//!
//! ```text
//! name|phone|MM-DD
//! Jane Doe|123456789|11-12
//! Daniel Vogel||
//! ```
//!
//! Absent phone numbers and birthdays are empty fields. Inside the name,
//! `\`, `|`, newline and carriage return are written as `\\`, `\|`, `\n` and
//! `\r`, so a record never contains a raw line break.

use crate::entry::{Birthday, Entry, NameKey, PhoneNumber};
use crate::sync::error::{SyncError, SyncResult};
use std::str::Chars;

/// Separator between record fields.
pub const FIELD_SEPARATOR: char = '|';

const ESCAPE: char = '\\';
const FIELD_COUNT: usize = 3;

/// Encodes an entry as a record.
#[must_use]
pub fn encode_entry(entry: &Entry) -> String {
    let mut out = String::with_capacity(entry.name().len() + 16);
    for c in entry.name().chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            FIELD_SEPARATOR => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push(FIELD_SEPARATOR);
    if let Some(phone) = entry.phone_number() {
        out.push_str(&phone.to_string());
    }
    out.push(FIELD_SEPARATOR);
    if let Some(birthday) = entry.birthday() {
        out.push_str(&birthday.to_string());
    }
    out
}

/// Decodes a record into an entry.
///
/// The name is normalized and must be non-empty. Name length limits are not
/// applied here; they belong to the address book receiving the entry.
pub fn decode_entry(record: &str) -> SyncResult<Entry> {
    let mut chars = record.chars();
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    loop {
        let (field, more) = read_field(&mut chars, record)?;
        fields.push(field);
        if !more {
            break;
        }
    }
    if fields.len() != FIELD_COUNT {
        return Err(SyncError::malformed(
            record,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    }

    let mut entry = Entry::with_name_limit(&fields[0], usize::MAX)
        .map_err(|e| SyncError::malformed(record, e.to_string()))?;
    if let Some(phone) = parse_phone(&fields[1], record)? {
        entry.set_phone_number(phone);
    }
    if let Some(birthday) = parse_birthday(&fields[2], record)? {
        entry.set_birthday(birthday);
    }
    Ok(entry)
}

/// Extracts the name key of a record without decoding the other fields.
pub fn record_key(record: &str) -> SyncResult<NameKey> {
    let (name, _) = read_field(&mut record.chars(), record)?;
    if name.is_empty() {
        return Err(SyncError::malformed(record, "name is empty"));
    }
    Ok(NameKey::new(&name))
}

/// Reads one field, unescaping as it goes.
///
/// Returns the field and whether a separator followed it.
fn read_field(chars: &mut Chars<'_>, record: &str) -> SyncResult<(String, bool)> {
    let mut field = String::new();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(ESCAPE) => field.push(ESCAPE),
                Some(FIELD_SEPARATOR) => field.push(FIELD_SEPARATOR),
                Some('n') => field.push('\n'),
                Some('r') => field.push('\r'),
                Some(other) => {
                    return Err(SyncError::malformed(
                        record,
                        format!("unknown escape sequence \\{other}"),
                    ))
                }
                None => return Err(SyncError::malformed(record, "dangling escape")),
            },
            FIELD_SEPARATOR => return Ok((field, true)),
            c => field.push(c),
        }
    }
    Ok((field, false))
}

fn parse_phone(field: &str, record: &str) -> SyncResult<Option<PhoneNumber>> {
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse::<u64>()
        .map(|n| Some(PhoneNumber::new(n)))
        .map_err(|e| SyncError::malformed(record, format!("invalid phone number: {e}")))
}

fn parse_birthday(field: &str, record: &str) -> SyncResult<Option<Birthday>> {
    if field.is_empty() {
        return Ok(None);
    }
    let (month, day) = field
        .split_once('-')
        .ok_or_else(|| SyncError::malformed(record, "birthday must be MM-DD"))?;
    let month = month
        .parse::<u8>()
        .map_err(|e| SyncError::malformed(record, format!("invalid birthday month: {e}")))?;
    let day = day
        .parse::<u8>()
        .map_err(|e| SyncError::malformed(record, format!("invalid birthday day: {e}")))?;
    Birthday::new(month, day)
        .map(Some)
        .map_err(|e| SyncError::malformed(record, e.to_string()))
}
