//! Stats Module
//!
//! Aggregations over the full catalog for the statistics endpoints.
//!
//! ## Overview
//! Each aggregation is a single pass over the frozen store. The catalog
//! never mutates after load, so there is no incremental maintenance; the
//! counts are recomputed per request.
//!
//! ## Submodules
//! - **`aggregate`**: Group-by counts over classification, series, and tags.
//! - **`types`**: Response DTOs for the stats and tag-listing endpoints.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod aggregate;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
