use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Catalog-wide counts grouped by classification and by series.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub by_classification: HashMap<String, usize>,
    pub by_series: BTreeMap<u32, usize>,
}

/// One tag with its occurrence count across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// All tags sorted by count descending.
#[derive(Debug, Serialize, Deserialize)]
pub struct TagListResponse {
    pub count: usize,
    pub tags: Vec<TagCount>,
}
