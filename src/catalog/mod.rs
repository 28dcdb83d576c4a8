//! Catalog Module
//!
//! The data layer of the service: an immutable, in-memory catalog of SCP
//! records built once at startup and shared read-only by every handler.
//!
//! ## Overview
//! Records arrive from a JSON dataset keyed by heterogeneous identifiers
//! (bare digits for some entries, already-prefixed `SCP-<digits>` for
//! others). The catalog absorbs that heterogeneity behind a normalizing
//! lookup so callers never see the key variance.
//!
//! ## Responsibilities
//! - **Normalization**: Canonicalizing user-supplied identifiers into the
//!   digits-only key space (`ident`).
//! - **Storage**: The frozen key-to-record map with alias-chain lookup
//!   (`store`).
//! - **Loading**: The one-shot dataset load at process start (`loader`).
//! - **API**: Record-level HTTP endpoints: get by ID, images, tags, health
//!   (`handlers`).
//!
//! ## Submodules
//! - **`ident`**: Identifier validation and normalization.
//! - **`store`**: The `Catalog` type and its lookup strategies.
//! - **`loader`**: Startup population from the JSON data file.
//! - **`types`**: Record schema and response DTOs.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod ident;
pub mod loader;
pub mod store;
pub mod types;
