//! API Error Types
//!
//! Every failure the query service can surface to a client is a deterministic
//! validation or lookup outcome. There are no transient faults and no retry
//! semantics: a request that fails once fails the same way every time until
//! the input changes.
//!
//! Errors are rendered as a JSON body `{ "error": "<message>" }` with a 400
//! status for validation failures and 404 for missed lookups.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Maximum accepted length (in characters) of a free-text search term.
pub const MAX_QUERY_LEN: usize = 100;
/// Maximum accepted length (in characters) of a tag search term.
pub const MAX_TAG_LEN: usize = 50;

/// Errors surfaced by the catalog query API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Identifier is neither all digits nor a case-insensitive `SCP-<digits>` form.
    #[error("invalid SCP identifier: {0}")]
    InvalidIdentifier(String),

    /// No record answers to the identifier under any key alias.
    #[error("SCP not found: {0}")]
    NotFound(String),

    /// Series parameter is non-numeric or outside the accepted range.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// Search requested without a usable `q` parameter.
    #[error("missing query parameter: q")]
    MissingQuery,

    /// Search term exceeds the accepted length.
    #[error("query too long (max {} characters)", MAX_QUERY_LEN)]
    QueryTooLong,

    /// Tag search requested without a usable `tag` parameter.
    #[error("missing query parameter: tag")]
    MissingTag,

    /// Tag term exceeds the accepted length.
    #[error("tag too long (max {} characters)", MAX_TAG_LEN)]
    TagTooLong,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidIdentifier(_)
            | ApiError::InvalidSeries(_)
            | ApiError::MissingQuery
            | ApiError::QueryTooLong
            | ApiError::MissingTag
            | ApiError::TagTooLong => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every handler's failure path converges here, so one log line
        // covers lookup misses and validation rejections alike.
        tracing::warn!("Request rejected: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
