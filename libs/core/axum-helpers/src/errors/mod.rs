pub mod handlers;
pub mod responses;

use crate::validation::{FieldViolations, field_violations};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every client error except validation failures.
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2025-01-01T12:00:00Z",
///   "status": 404,
///   "message": "Task not found with id: 999"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// When the error was produced (UTC)
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Pair the body with its status code as a response.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; its `IntoResponse` is the one place
/// that decides status codes and bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(FieldViolations),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(field_violations(&errors))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Validation(violations) => {
                tracing::info!(?violations, "Validation failed");
                (status, Json(violations)).into_response()
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                ErrorResponse::new(status, e.body_text()).into_response_with(status)
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                tracing::info!(status = status.as_u16(), "{}", msg);
                ErrorResponse::new(status, msg).into_response_with(status)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                ErrorResponse::new(status, msg).into_response_with(status)
            }
            AppError::InternalServerError(msg) => {
                // Details stay in the logs
                tracing::error!("Internal server error: {}", msg);
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_of(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn test_validation_body_is_field_map() {
        let mut violations = FieldViolations::new();
        violations.insert("title".to_string(), "Title is required".to_string());

        let response = AppError::Validation(violations).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Title is required" }));
    }

    #[tokio::test]
    async fn test_not_found_body_shape() {
        let response = AppError::NotFound("Task not found with id: 999".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"], "Task not found with id: 999");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_conflict_status() {
        let response = AppError::Conflict("Email already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json: Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(json["status"], 409);
    }

    #[tokio::test]
    async fn test_internal_error_has_empty_body() {
        let response =
            AppError::InternalServerError("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.is_empty());
    }
}
