//! SCP Catalog Query Service Library
//!
//! This library crate defines the core modules behind the read-only HTTP API
//! served by the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems plus a shared
//! error type:
//!
//! - **`catalog`**: The data layer. Holds the immutable in-memory catalog of
//!   SCP records, the identifier normalizer, the one-shot dataset loader, and
//!   the record-level HTTP handlers (lookup by ID, images, tags, health).
//! - **`query`**: The query engine. Contains the filter predicates, the
//!   substring search over indexed fields, pagination, and the HTTP handlers
//!   for listing, searching, and series queries.
//! - **`stats`**: The aggregation layer. Computes group-by counts over the
//!   full catalog (by classification, by series, by tag) for the statistics
//!   endpoints.
//! - **`error`**: The API error type shared by all handlers, mapping
//!   validation and lookup failures to structured JSON responses.

pub mod catalog;
pub mod error;
pub mod query;
pub mod stats;
