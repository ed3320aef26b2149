use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, NotFoundResponse, ValidationErrorResponse,
};
use axum_helpers::{AppError, IdPath, JsonBody, QueryParams};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{EmailLookup, User, UserPayload};
use crate::repository::UserRepository;
use crate::service::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.get_all().await?;
    Ok(Json(users))
}

/// Look a user up by exact email
#[utoipa::path(
    get,
    path = "/search",
    tag = "users",
    params(EmailLookup),
    responses(
        (status = 200, description = "User with that email", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn find_user_by_email<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    QueryParams(lookup): QueryParams<EmailLookup>,
) -> Result<Json<User>, AppError> {
    match service.find_by_email(&lookup.email).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::NotFound(format!(
            "User not found with email: {}",
            lookup.email
        ))),
    }
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, response = ValidationErrorResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> UserResult<impl IntoResponse> {
    let user = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace name, email and role of a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UserPayload>,
) -> UserResult<Json<User>> {
    let user = service.update(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
