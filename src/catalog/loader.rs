use super::store::Catalog;
use super::types::ScpRecord;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Loads the catalog from a JSON object file mapping keys to records.
///
/// A missing or unreadable file yields an empty, unloaded catalog rather
/// than a startup failure; the condition stays observable through the
/// health endpoint. Entries are ordered by numeric key so scans and search
/// results are deterministic across restarts.
pub fn load_catalog(path: &Path) -> Catalog {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("No dataset at {}: {}", path.display(), err);
            return Catalog::empty();
        }
    };

    let records: HashMap<String, ScpRecord> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("Failed to parse dataset {}: {}", path.display(), err);
            return Catalog::empty();
        }
    };

    let mut entries: Vec<(String, ScpRecord)> = records.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| key_order(a).cmp(&key_order(b)));

    Catalog::from_entries(entries)
}

/// Sort key: numeric value of the digit portion, then the raw key for
/// non-numeric or colliding forms.
fn key_order(key: &str) -> (u64, String) {
    let digits: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.parse().unwrap_or(u64::MAX), key.to_string())
}
