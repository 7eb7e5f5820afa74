//! Check command implementation.

use super::{read_records, RecordLine};
use addrbook_core::{decode_entry, NameKey};
use std::collections::BTreeMap;
use std::path::Path;

/// Check result.
#[derive(Debug, Default)]
pub struct CheckResult {
    /// Number of records checked.
    pub records_checked: usize,
    /// Number of records that decode and have a unique key.
    pub valid_records: usize,
    /// List of problems found.
    pub errors: Vec<String>,
}

impl CheckResult {
    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every record, reporting malformed records and repeated names.
pub fn check_records(records: &[RecordLine]) -> CheckResult {
    let mut result = CheckResult::default();
    let mut first_seen: BTreeMap<NameKey, usize> = BTreeMap::new();

    for RecordLine { line, record } in records {
        result.records_checked += 1;
        let entry = match decode_entry(record) {
            Ok(entry) => entry,
            Err(e) => {
                result.errors.push(format!("line {}: {}", line, e));
                continue;
            }
        };
        if let Some(first) = first_seen.get(&entry.key()) {
            result.errors.push(format!(
                "line {}: {:?} repeats the name on line {}",
                line,
                entry.name(),
                first
            ));
            continue;
        }
        first_seen.insert(entry.key(), *line);
        result.valid_records += 1;
    }
    result
}

/// Runs the check command.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Checking records in {:?}", path);

    let records = read_records(path)?;
    let result = check_records(&records);
    tracing::info!(
        checked = result.records_checked,
        valid = result.valid_records,
        "checked record file"
    );

    println!("  Records checked: {}", result.records_checked);
    println!("  Valid records: {}", result.valid_records);
    for error in &result.errors {
        println!("    - {}", error);
    }

    println!();
    if result.is_ok() {
        println!("✓ Record check passed");
        Ok(())
    } else {
        println!("✗ Record check failed");
        Err(format!("{} problem(s) found", result.errors.len()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::record_file;
    use super::*;

    #[test]
    fn clean_file_passes() {
        let file = record_file("Jane Doe|123|11-12\nDaniel Vogel||\n");
        assert!(run(file.path()).is_ok());
    }

    #[test]
    fn malformed_records_are_reported_with_line_numbers() {
        let file = record_file("Jane Doe||\nonly one field\n\nBob|x|\nAnn||13-01\n");
        let result = check_records(&read_records(file.path()).unwrap());
        assert_eq!(result.records_checked, 4);
        assert_eq!(result.valid_records, 1);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors[0].starts_with("line 2:"));
        assert!(result.errors[1].starts_with("line 4:"));
        assert!(result.errors[2].starts_with("line 5:"));
        assert!(run(file.path()).is_err());
    }

    #[test]
    fn repeated_names_are_reported() {
        let file = record_file("Jane Doe||\njane doe|5|\n");
        let result = check_records(&read_records(file.path()).unwrap());
        assert_eq!(result.valid_records, 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("line 1"));
    }
}
