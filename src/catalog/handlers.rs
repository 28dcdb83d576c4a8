use super::store::Catalog;
use super::types::{HealthResponse, ImagesResponse, ScpDetail, TagsResponse};
use crate::error::ApiError;
use axum::extract::Path;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_scp(
    Path(id): Path<String>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<ScpDetail>, ApiError> {
    let (key, record) = catalog.lookup(&id)?;
    Ok(Json(ScpDetail::from_record(key, record)))
}

pub async fn handle_get_images(
    Path(id): Path<String>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<ImagesResponse>, ApiError> {
    let (key, record) = catalog.lookup(&id)?;
    let images = record.images().to_vec();
    Ok(Json(ImagesResponse {
        id: record.display_id(key),
        count: images.len(),
        images,
    }))
}

pub async fn handle_get_tags(
    Path(id): Path<String>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Result<Json<TagsResponse>, ApiError> {
    let (key, record) = catalog.lookup(&id)?;
    let tags = record.tags().to_vec();
    Ok(Json(TagsResponse {
        id: record.display_id(key),
        count: tags.len(),
        tags,
    }))
}

pub async fn handle_health(Extension(catalog): Extension<Arc<Catalog>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        loaded: catalog.is_loaded(),
        entry_count: catalog.len(),
    })
}
