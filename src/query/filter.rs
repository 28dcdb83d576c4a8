use crate::catalog::types::ScpRecord;

/// Optional predicates evaluated against a record. All supplied predicates
/// must hold simultaneously; absent ones are vacuously true.
///
/// Classification is matched by case-insensitive equality while the tag
/// predicate is case-insensitive substring containment. The asymmetry is
/// intentional: partial tag queries are expected to succeed.
#[derive(Debug, Default, Clone)]
pub struct RecordFilters {
    pub classification: Option<String>,
    pub series: Option<u32>,
    pub tag: Option<String>,
}

impl RecordFilters {
    pub fn is_empty(&self) -> bool {
        self.classification.is_none() && self.series.is_none() && self.tag.is_none()
    }

    pub fn matches(&self, record: &ScpRecord) -> bool {
        if let Some(classification) = &self.classification {
            if !record.classification().eq_ignore_ascii_case(classification) {
                return false;
            }
        }

        if let Some(series) = self.series {
            if record.series() != series {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            let needle = tag.to_lowercase();
            let hit = record
                .tags()
                .iter()
                .any(|t| t.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}
