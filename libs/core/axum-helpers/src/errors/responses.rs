//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use std::collections::BTreeMap;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - field validation failed",
    content_type = "application/json",
    example = json!({
        "title": "Title must be between 3 and 100 characters",
        "status": "Status is required"
    })
)]
pub struct ValidationErrorResponse(pub BTreeMap<String, String>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body, path or query",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 400,
        "message": "Invalid id: abc"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 404,
        "message": "Task not found with id: 999"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T12:00:00Z",
        "status": 409,
        "message": "Email already exists: test@example.com"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
