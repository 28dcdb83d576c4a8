//! Pagination
//!
//! Validated limit/offset parameters and bounds-safe slicing. Out-of-range
//! parameters are clamped, never rejected: an offset past the end of the
//! sequence yields an empty page, not an error.

use serde::Serialize;

/// Default page size when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: usize = 50;
/// Largest page size a client can request.
pub const MAX_LIMIT: usize = 100;

/// Clamped limit/offset pair. Always describes a valid non-negative slice
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Builds a pagination from raw query parameters.
    ///
    /// `limit` is clamped to `[1, MAX_LIMIT]` and defaults to
    /// `DEFAULT_LIMIT` when absent or non-numeric; `offset` is clamped to
    /// `>= 0` and defaults to 0.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.clamp(1, MAX_LIMIT as i64) as usize)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.max(0) as usize)
            .unwrap_or(0);
        Pagination { limit, offset }
    }
}

/// One page of results plus enough bookkeeping for clients to continue.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}

/// Slices `[offset, offset + limit)` out of `items`, clamped to bounds.
///
/// Input order is preserved; `has_more` reports whether at least one entry
/// exists beyond the returned slice.
pub fn paginate<T: Clone>(items: &[T], page: Pagination) -> Page<T> {
    let total = items.len();
    let start = page.offset.min(total);
    let end = page.offset.saturating_add(page.limit).min(total);
    Page {
        items: items[start..end].to_vec(),
        total,
        has_more: page.offset.saturating_add(page.limit) < total,
    }
}
