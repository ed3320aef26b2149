//! Custom extractors for Axum handlers.
//!
//! Each one rejects with [`AppError`](crate::errors::AppError), so malformed
//! input gets the same `{timestamp, status, message}` body as every other
//! client error.

pub mod id_path;
pub mod json_body;
pub mod query;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query::QueryParams;
