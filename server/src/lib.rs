//! Docket case-management server
//!
//! - `api` - HTTP routes, extractors and OpenAPI document
//! - `core` - CLI, configuration, storage and shutdown
//! - `data` - Filter builder, SQL rendering and SQLite repositories
//! - `utils` - Small shared helpers

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod utils;
