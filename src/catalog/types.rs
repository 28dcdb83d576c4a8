//! Catalog Data Types
//!
//! Defines the record schema as it appears in the dataset plus the response
//! DTOs for the record-level endpoints.
//!
//! Stored records keep their source shape untouched; the sentinel defaults
//! ("unknown" name, "unclassified" classification, series 1) are applied by
//! the accessor methods at the read boundary, never written back.

use serde::{Deserialize, Serialize};

/// Sentinel name for records whose dataset entry carries none.
pub const UNKNOWN_NAME: &str = "unknown";
/// Sentinel classification for records whose dataset entry carries none.
pub const UNCLASSIFIED: &str = "unclassified";
/// Series assigned to records whose dataset entry carries none.
pub const DEFAULT_SERIES: u32 = 1;

/// One catalog entry as stored, a faithful copy of the dataset record.
///
/// Every field except the lookup key (held by the catalog, not the record)
/// is optional in the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScpRecord {
    /// Canonical display identifier, e.g. `SCP-173`.
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(alias = "class")]
    pub classification: Option<String>,
    pub series: Option<u32>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl ScpRecord {
    /// Display identifier, synthesized from the key when the record has none.
    pub fn display_id(&self, key: &str) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("SCP-{key}"),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn classification(&self) -> &str {
        self.classification.as_deref().unwrap_or(UNCLASSIFIED)
    }

    pub fn series(&self) -> u32 {
        self.series.unwrap_or(DEFAULT_SERIES)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }
}

/// Full record view returned by the get-by-ID endpoint, defaults applied.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScpDetail {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub series: u32,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl ScpDetail {
    pub fn from_record(key: &str, record: &ScpRecord) -> Self {
        ScpDetail {
            id: record.display_id(key),
            name: record.name().to_string(),
            classification: record.classification().to_string(),
            series: record.series(),
            description: record.description.clone(),
            tags: record.tags().to_vec(),
            images: record.images().to_vec(),
        }
    }
}

/// Response for the images endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub id: String,
    pub count: usize,
    pub images: Vec<String>,
}

/// Response for the per-record tags endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TagsResponse {
    pub id: String,
    pub count: usize,
    pub tags: Vec<String>,
}

/// Response for the health endpoint.
///
/// `loaded` reports whether the data file was found and parsed; it stays
/// `true` for a present-but-empty dataset, so the two conditions are
/// observable separately.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub loaded: bool,
    pub entry_count: usize,
}
