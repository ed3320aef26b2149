use axum::{http::StatusCode, response::Response};

use super::ErrorResponse;

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(StatusCode::NOT_FOUND, "The requested resource was not found")
        .into_response_with(StatusCode::NOT_FOUND)
}
