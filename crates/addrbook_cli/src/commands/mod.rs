//! CLI command implementations.

pub mod check;
pub mod merge;
pub mod normalize;

use std::fs;
use std::path::Path;

/// A record read from a record file, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// Line number in the file.
    pub line: usize,
    /// The record text, without line terminator.
    pub record: String,
}

/// Reads the records of a record file, skipping blank lines.
pub fn read_records(path: &Path) -> Result<Vec<RecordLine>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let records = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| RecordLine {
            line: index + 1,
            record: line.trim_end_matches('\r').to_string(),
        })
        .collect::<Vec<_>>();
    tracing::debug!(path = %path.display(), records = records.len(), "read record file");
    Ok(records)
}


#[cfg(test)]
mod tests {
    use super::test_support::record_file;
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let file = record_file("Jane Doe||\n\n   \nDaniel Vogel|5|\r\n");
        let records = read_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                RecordLine {
                    line: 1,
                    record: "Jane Doe||".to_string()
                },
                RecordLine {
                    line: 4,
                    record: "Daniel Vogel|5|".to_string()
                },
            ]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
