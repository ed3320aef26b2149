use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldViolations};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(i64),

    #[error("Invalid user: {0:?}")]
    Validation(FieldViolations),

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User not found with id: {}", id)),
            UserError::Validation(violations) => AppError::Validation(violations),
            UserError::DuplicateEmail(email) => {
                AppError::Conflict(format!("Email already in use: {}", email))
            }
            UserError::Database(msg) => {
                AppError::InternalServerError(format!("Database error: {}", msg))
            }
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(UserError::NotFound(1).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            UserError::DuplicateEmail("a@b.io".to_string()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            UserError::Validation(FieldViolations::new()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::Internal("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
