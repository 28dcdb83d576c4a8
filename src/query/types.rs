//! Query Data Types
//!
//! Data Transfer Objects (DTOs) for the list, search, tag-search, and series
//! endpoints. Display defaults are already applied by the time these are
//! constructed; serialization is plain field-for-field JSON.

use crate::catalog::types::ScpRecord;
use serde::{Deserialize, Serialize};

/// Compact record view used by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScpSummary {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub series: u32,
}

impl ScpSummary {
    pub fn from_record(key: &str, record: &ScpRecord) -> Self {
        ScpSummary {
            id: record.display_id(key),
            name: record.name().to_string(),
            classification: record.classification().to_string(),
            series: record.series(),
        }
    }
}

/// Paginated listing response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub total: usize,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
    pub scps: Vec<ScpSummary>,
}

/// One search result: display fields plus a truncated description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub series: u32,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Search response; `total_found` counts all matches before the result cap,
/// `count` the entries actually returned.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_found: usize,
    pub count: usize,
    pub results: Vec<SearchMatch>,
}

/// Paginated response for the tag-substring search.
#[derive(Debug, Serialize, Deserialize)]
pub struct TagSearchResponse {
    pub tag: String,
    pub total: usize,
    pub count: usize,
    pub has_more: bool,
    pub scps: Vec<ScpSummary>,
}

/// Response for the per-series listing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub series: u32,
    pub count: usize,
    pub scps: Vec<ScpSummary>,
}
