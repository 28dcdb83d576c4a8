//! Query Module
//!
//! The core component responsible for executing user queries against the
//! frozen catalog.
//!
//! ## Overview
//! Every query is a pure function of its parameters plus the immutable
//! catalog snapshot: a linear scan applying optional predicates, followed by
//! bounded pagination or a fixed result cap. There is no index beyond the
//! store itself and no per-request state.
//!
//! ## Responsibilities
//! - **Filtering**: Optional AND-ed predicates over classification, series,
//!   and tags.
//! - **Search**: Substring matching of a free-text term across the id, name,
//!   and description fields, with capped results and a total count.
//! - **Pagination**: Clamped limit/offset parameters and bounds-safe slicing.
//! - **API**: HTTP handlers for the list, search, tag-search, and series
//!   endpoints.
//!
//! ## Submodules
//! - **`filter`**: The record predicate set.
//! - **`engine`**: Free-text search and description truncation.
//! - **`pagination`**: Parameter clamping and slice logic.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod engine;
pub mod filter;
pub mod handlers;
pub mod pagination;
pub mod types;
