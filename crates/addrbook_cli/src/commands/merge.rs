//! Merge command implementation.

use super::read_records;
use addrbook_core::{decode_entry, merge_all, ConflictPolicy, Entry};
use serde::Serialize;
use std::path::PathBuf;

/// Merge result, as printed in JSON format.
#[derive(Debug, Serialize)]
pub struct MergeReport {
    /// Conflict policy used.
    pub policy: String,
    /// Input files in preference order.
    pub files: Vec<String>,
    /// Number of input records.
    pub input_records: usize,
    /// Merged entries, sorted by name key.
    pub entries: Vec<Entry>,
}

/// Merged records together with the number of records read to produce them.
#[derive(Debug)]
pub struct MergedFiles {
    /// Merged records, sorted by name key.
    pub records: Vec<String>,
    /// Number of records read across all files.
    pub input_records: usize,
}

/// Merges the record files, earlier files preferred on conflicts.
pub fn merge_files(
    files: &[PathBuf],
    policy: ConflictPolicy,
) -> Result<MergedFiles, Box<dyn std::error::Error>> {
    let mut lists = Vec::with_capacity(files.len());
    for path in files {
        let records: Vec<String> = read_records(path)?
            .into_iter()
            .map(|line| line.record)
            .collect();
        lists.push(records);
    }

    let input_records = lists.iter().map(Vec::len).sum::<usize>();
    let records = merge_all(lists.iter().map(Vec::as_slice), policy)?;
    tracing::info!(
        files = files.len(),
        input = input_records,
        merged = records.len(),
        %policy,
        "merged record files"
    );
    Ok(MergedFiles {
        records,
        input_records,
    })
}

/// Runs the merge command.
pub fn run(
    files: &[PathBuf],
    policy: ConflictPolicy,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let merged = merge_files(files, policy)?;

    match format {
        "json" => {
            let report = report(files, policy, merged)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            for record in &merged.records {
                println!("{}", record);
            }
        }
        other => return Err(format!("Unknown format: {}", other).into()),
    }
    Ok(())
}

fn report(
    files: &[PathBuf],
    policy: ConflictPolicy,
    merged: MergedFiles,
) -> Result<MergeReport, Box<dyn std::error::Error>> {
    let entries = merged
        .records
        .iter()
        .map(|record| decode_entry(record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MergeReport {
        policy: policy.to_string(),
        files: files.iter().map(|p| p.display().to_string()).collect(),
        input_records: merged.input_records,
        entries,
    })
}
