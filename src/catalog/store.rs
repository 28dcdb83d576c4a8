//! Catalog Store
//!
//! An immutable-after-construction map from dataset key to record. The store
//! is built once at startup and shared behind an `Arc`; no mutation API
//! exists, so concurrent readers need no locking discipline.
//!
//! ## Key aliases
//! Datasets key some entries by bare digits (`"173"`) and others by the
//! prefixed display form (`"SCP-173"`). Rather than duplicating entries or
//! migrating keys, `lookup` tries an ordered chain of probes against the
//! single source-of-truth map: the normalized key, the raw identifier as
//! given, then the prefixed form of the normalized key. First hit wins.

use super::ident::normalize_identifier;
use super::types::ScpRecord;
use crate::error::ApiError;
use std::collections::HashMap;

/// The frozen record store plus a deterministic iteration order.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<(String, ScpRecord)>,
    index: HashMap<String, usize>,
    loaded: bool,
}

impl Catalog {
    /// An empty catalog reporting `loaded = false`, used when no data source
    /// could be read. Every query degrades to not-found / zero-count.
    pub fn empty() -> Self {
        Catalog {
            entries: Vec::new(),
            index: HashMap::new(),
            loaded: false,
        }
    }

    /// Builds a loaded catalog from `(key, record)` pairs, preserving the
    /// given order for scans. Later duplicates of a key are dropped.
    pub fn from_entries(entries: Vec<(String, ScpRecord)>) -> Self {
        let mut catalog = Catalog {
            entries: Vec::with_capacity(entries.len()),
            index: HashMap::with_capacity(entries.len()),
            loaded: true,
        };
        for (key, record) in entries {
            if catalog.index.contains_key(&key) {
                tracing::warn!("Duplicate catalog key {}, keeping first entry", key);
                continue;
            }
            catalog.index.insert(key.clone(), catalog.entries.len());
            catalog.entries.push((key, record));
        }
        catalog
    }

    /// Resolves a raw identifier to its record.
    ///
    /// Probe order: normalized key, raw identifier verbatim, `SCP-` +
    /// normalized key. Returns the stored key alongside the record so
    /// callers can synthesize display identifiers.
    pub fn lookup(&self, raw: &str) -> Result<(&str, &ScpRecord), ApiError> {
        let key = normalize_identifier(raw)?;
        let probes = [key.clone(), raw.trim().to_string(), format!("SCP-{key}")];
        for probe in &probes {
            if let Some(&slot) = self.index.get(probe) {
                let (stored_key, record) = &self.entries[slot];
                return Ok((stored_key, record));
            }
        }
        Err(ApiError::NotFound(raw.to_string()))
    }

    /// Full snapshot iteration in the catalog's deterministic order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &ScpRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a data source was found and parsed at startup.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
