//! Custom extractors for Axum handlers.
//!
//! These route extraction failures through [`crate::AppError`] so rejected
//! requests get the same JSON error body as handler errors.

pub mod app_json;
pub mod query;

pub use app_json::AppJson;
pub use query::QueryParams;
