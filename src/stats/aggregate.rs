use crate::catalog::store::Catalog;
use std::collections::{BTreeMap, HashMap};

/// Counts records per classification, defaults applied at the read boundary.
pub fn by_classification(catalog: &Catalog) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (_, record) in catalog.records() {
        counts
            .entry(record.classification().to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
    counts
}

/// Counts records per series number.
pub fn by_series(catalog: &Catalog) -> BTreeMap<u32, usize> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for (_, record) in catalog.records() {
        counts
            .entry(record.series())
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
    counts
}

/// Counts every (record, tag) pair, sorted by count descending.
///
/// Ties keep first-seen order: tags accumulate in scan order and the final
/// sort is stable on the count alone.
pub fn tag_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for (_, record) in catalog.records() {
        for tag in record.tags() {
            match slots.get(tag) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(tag.clone(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
