use super::filter::RecordFilters;
use super::types::SearchMatch;
use crate::catalog::store::Catalog;

/// Hard cap on the number of search results returned. Matching beyond the
/// cap still counts toward `total_found`.
pub const RESULT_CAP: usize = 20;
/// Description preview length, in characters.
pub const DESCRIPTION_PREVIEW_LEN: usize = 200;

/// Scans the catalog for records whose id, name, or description contains
/// the lowercased `term`, with `filters` applied on top.
///
/// Returns at most [`RESULT_CAP`] matches in catalog-scan order plus the
/// total match count before the cap. No relevance ranking: ties are broken
/// by scan order.
pub fn search(catalog: &Catalog, term: &str, filters: &RecordFilters) -> (Vec<SearchMatch>, usize) {
    let needle = term.to_lowercase();
    let mut results = Vec::new();
    let mut total_found = 0usize;

    for (key, record) in catalog.records() {
        if !filters.matches(record) {
            continue;
        }

        let id = record.display_id(key);
        let matched = id.to_lowercase().contains(&needle)
            || record.name().to_lowercase().contains(&needle)
            || record
                .description()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
        if !matched {
            continue;
        }

        total_found += 1;
        if results.len() < RESULT_CAP {
            results.push(SearchMatch {
                id,
                name: record.name().to_string(),
                classification: record.classification().to_string(),
                series: record.series(),
                description: record.description().map(preview),
                tags: record.tags().to_vec(),
            });
        }
    }

    (results, total_found)
}

/// First [`DESCRIPTION_PREVIEW_LEN`] characters of the description, with a
/// marker appended when anything was cut.
pub fn preview(description: &str) -> String {
    let mut chars = description.chars();
    let cut: String = chars.by_ref().take(DESCRIPTION_PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{cut}...")
    } else {
        cut
    }
}
