use super::aggregate::{by_classification, by_series, tag_counts};
use super::types::{StatsResponse, TagCount, TagListResponse};
use crate::catalog::store::Catalog;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_stats(Extension(catalog): Extension<Arc<Catalog>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total: catalog.len(),
        by_classification: by_classification(&catalog),
        by_series: by_series(&catalog),
    })
}

pub async fn handle_list_tags(Extension(catalog): Extension<Arc<Catalog>>) -> Json<TagListResponse> {
    let tags: Vec<TagCount> = tag_counts(&catalog)
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();

    Json(TagListResponse {
        count: tags.len(),
        tags,
    })
}
