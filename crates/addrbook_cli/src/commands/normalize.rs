//! Normalize command implementation.

use addrbook_core::{fold, normalize, validate_name, BookResult};

/// The canonical form and key of one name.
#[derive(Debug, PartialEq, Eq)]
pub struct NormalizedName {
    /// Canonical display form.
    pub canonical: String,
    /// Case-insensitive key.
    pub key: String,
}

/// Normalizes a single name, rejecting names a book would reject.
pub fn normalize_name(raw: &str) -> BookResult<NormalizedName> {
    validate_name(raw)?;
    let canonical = normalize(raw);
    let key = fold(&canonical);
    Ok(NormalizedName { canonical, key })
}

/// Runs the normalize command.
pub fn run(names: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0usize;
    for raw in names {
        match normalize_name(raw) {
            Ok(name) => println!("{}\t{}", name.canonical, name.key),
            Err(e) => {
                tracing::warn!(name = %raw, "rejected name");
                eprintln!("✗ {:?}: {}", raw, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} names rejected", failures, names.len()).into());
    }
    Ok(())
}
