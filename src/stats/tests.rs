//! Stats Module Tests
//!
//! Validates the catalog-wide aggregations: classification counts, series
//! counts, and the sorted tag tally.

#[cfg(test)]
mod tests {
    use crate::catalog::store::Catalog;
    use crate::catalog::types::ScpRecord;
    use crate::stats::aggregate::{by_classification, by_series, tag_counts};
    use crate::stats::types::{StatsResponse, TagCount, TagListResponse};

    fn entry(key: &str, classification: Option<&str>, series: Option<u32>, tags: &[&str]) -> (String, ScpRecord) {
        (
            key.to_string(),
            ScpRecord {
                id: None,
                name: None,
                classification: classification.map(str::to_string),
                series,
                description: None,
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
                images: None,
            },
        )
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_entries(vec![
            entry("173", Some("Euclid"), Some(1), &["sculpture", "hostile"]),
            entry("682", Some("Keter"), Some(1), &["reptile", "hostile"]),
            entry("049", Some("Euclid"), Some(1), &["humanoid", "hostile"]),
            entry("2000", Some("Thaumiel"), Some(2), &["reptile"]),
            entry("3000", None, None, &[]),
        ])
    }

    // ============================================================
    // CLASSIFICATION COUNTS
    // ============================================================

    #[test]
    fn test_by_classification_counts() {
        let counts = by_classification(&sample_catalog());

        assert_eq!(counts.get("Euclid"), Some(&2));
        assert_eq!(counts.get("Keter"), Some(&1));
        assert_eq!(counts.get("Thaumiel"), Some(&1));
    }

    #[test]
    fn test_by_classification_applies_default() {
        let counts = by_classification(&sample_catalog());
        assert_eq!(counts.get("unclassified"), Some(&1));
    }

    #[test]
    fn test_by_classification_counts_sum_to_total() {
        let catalog = sample_catalog();
        let total: usize = by_classification(&catalog).values().sum();
        assert_eq!(total, catalog.len());
    }

    // ============================================================
    // SERIES COUNTS
    // ============================================================

    #[test]
    fn test_by_series_counts() {
        let counts = by_series(&sample_catalog());

        // The record without a series lands in series 1 with the default.
        assert_eq!(counts.get(&1), Some(&4));
        assert_eq!(counts.get(&2), Some(&1));
    }

    #[test]
    fn test_by_series_is_sorted() {
        let catalog = Catalog::from_entries(vec![
            entry("2000", None, Some(2), &[]),
            entry("173", None, Some(1), &[]),
            entry("5000", None, Some(5), &[]),
        ]);
        let series: Vec<u32> = by_series(&catalog).keys().copied().collect();
        assert_eq!(series, vec![1, 2, 5]);
    }

    // ============================================================
    // TAG COUNTS
    // ============================================================

    #[test]
    fn test_tag_counts_sorted_descending() {
        let counts = tag_counts(&sample_catalog());

        assert_eq!(counts[0], ("hostile".to_string(), 3));
        assert_eq!(counts[1], ("reptile".to_string(), 2));
        for window in counts.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn test_tag_counts_sum_to_record_tag_pairs() {
        let catalog = sample_catalog();
        let pairs: usize = catalog.records().map(|(_, r)| r.tags().len()).sum();
        let counted: usize = tag_counts(&catalog).iter().map(|(_, c)| c).sum();
        assert_eq!(counted, pairs);
    }

    #[test]
    fn test_tag_counts_ties_keep_first_seen_order() {
        let catalog = Catalog::from_entries(vec![
            entry("1", None, None, &["alpha", "beta"]),
            entry("2", None, None, &["gamma"]),
        ]);
        let counts = tag_counts(&catalog);

        // All counts are 1; scan order decides.
        let tags: Vec<&str> = counts.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_tag_counts_empty_catalog() {
        assert!(tag_counts(&Catalog::empty()).is_empty());
    }

    // ============================================================
    // SERIALIZATION
    // ============================================================

    #[test]
    fn test_stats_response_serialization() {
        let catalog = sample_catalog();
        let response = StatsResponse {
            total: catalog.len(),
            by_classification: by_classification(&catalog),
            by_series: by_series(&catalog),
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: StatsResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.total, 5);
        assert_eq!(restored.by_classification.get("Euclid"), Some(&2));
        assert_eq!(restored.by_series.get(&2), Some(&1));
    }

    #[test]
    fn test_tag_list_response_serialization() {
        let response = TagListResponse {
            count: 1,
            tags: vec![TagCount {
                tag: "hostile".to_string(),
                count: 3,
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: TagListResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.count, 1);
        assert_eq!(restored.tags[0].tag, "hostile");
        assert_eq!(restored.tags[0].count, 3);
    }
}
