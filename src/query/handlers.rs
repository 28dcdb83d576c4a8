use super::engine::search;
use super::filter::RecordFilters;
use super::pagination::{paginate, Pagination};
use super::types::{
    ListResponse, ScpSummary, SearchResponse, SeriesResponse, TagSearchResponse,
};
use crate::catalog::store::Catalog;
use crate::error::{ApiError, MAX_QUERY_LEN, MAX_TAG_LEN};
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Series numbers the dedicated series endpoint accepts.
pub const SERIES_RANGE: std::ops::RangeInclusive<u32> = 1..=9;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub series: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub class: Option<String>,
    pub series: Option<String>,
}

#[derive(Deserialize)]
pub struct TagSearchParams {
    pub tag: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Parses an optional series filter parameter: any integer >= 1 is accepted
/// here, only the dedicated series endpoint enforces the 1..=9 window.
pub fn parse_series_param(raw: Option<&str>) -> Result<Option<u32>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 && n <= u32::MAX as i64 => Ok(Some(n as u32)),
        _ => Err(ApiError::InvalidSeries(raw.to_string())),
    }
}

/// Validates the free-text search term: required, trimmed, bounded length.
pub fn validate_search_term(raw: Option<&str>) -> Result<String, ApiError> {
    let term = raw.map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return Err(ApiError::MissingQuery);
    }
    if term.chars().count() > MAX_QUERY_LEN {
        return Err(ApiError::QueryTooLong);
    }
    Ok(term.to_string())
}

/// Validates the tag search term: required, trimmed, bounded length.
pub fn validate_tag_term(raw: Option<&str>) -> Result<String, ApiError> {
    let tag = raw.map(str::trim).unwrap_or_default();
    if tag.is_empty() {
        return Err(ApiError::MissingTag);
    }
    if tag.chars().count() > MAX_TAG_LEN {
        return Err(ApiError::TagTooLong);
    }
    Ok(tag.to_string())
}

pub async fn handle_list_scps(
    Query(params): Query<ListParams>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<ListResponse>, ApiError> {
    let filters = RecordFilters {
        series: parse_series_param(params.series.as_deref())?,
        ..RecordFilters::default()
    };
    let pagination = Pagination::from_params(params.limit.as_deref(), params.offset.as_deref());

    let summaries: Vec<ScpSummary> = catalog
        .records()
        .filter(|(_, record)| filters.matches(record))
        .map(|(key, record)| ScpSummary::from_record(key, record))
        .collect();

    let page = paginate(&summaries, pagination);
    Ok(Json(ListResponse {
        total: page.total,
        count: page.items.len(),
        limit: pagination.limit,
        offset: pagination.offset,
        has_more: page.has_more,
        scps: page.items,
    }))
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = validate_search_term(params.q.as_deref())?;
    let filters = RecordFilters {
        classification: params.class.clone(),
        series: parse_series_param(params.series.as_deref())?,
        tag: None,
    };

    let (results, total_found) = search(&catalog, &term, &filters);
    Ok(Json(SearchResponse {
        query: term,
        total_found,
        count: results.len(),
        results,
    }))
}

pub async fn handle_search_by_tag(
    Query(params): Query<TagSearchParams>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<TagSearchResponse>, ApiError> {
    let tag = validate_tag_term(params.tag.as_deref())?;
    let pagination = Pagination::from_params(params.limit.as_deref(), params.offset.as_deref());
    let filters = RecordFilters {
        tag: Some(tag.clone()),
        ..RecordFilters::default()
    };

    let summaries: Vec<ScpSummary> = catalog
        .records()
        .filter(|(_, record)| filters.matches(record))
        .map(|(key, record)| ScpSummary::from_record(key, record))
        .collect();

    let page = paginate(&summaries, pagination);
    Ok(Json(TagSearchResponse {
        tag,
        total: page.total,
        count: page.items.len(),
        has_more: page.has_more,
        scps: page.items,
    }))
}

/// Validates the series path segment for the dedicated series endpoint:
/// must parse as an integer inside [`SERIES_RANGE`].
pub fn validate_series_path(raw: &str) -> Result<u32, ApiError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| SERIES_RANGE.contains(n))
        .ok_or_else(|| ApiError::InvalidSeries(raw.to_string()))
}

/// Collects every record in the given series. A series with no records
/// yields an empty listing with `count` 0, not an error.
pub fn series_listing(catalog: &Catalog, number: u32) -> SeriesResponse {
    let scps: Vec<ScpSummary> = catalog
        .records()
        .filter(|(_, record)| record.series() == number)
        .map(|(key, record)| ScpSummary::from_record(key, record))
        .collect();

    SeriesResponse {
        series: number,
        count: scps.len(),
        scps,
    }
}

pub async fn handle_get_series(
    Path(series): Path<String>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let number = validate_series_path(&series)?;
    Ok(Json(series_listing(&catalog, number)))
}
