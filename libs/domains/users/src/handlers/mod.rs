mod endpoints;

use axum::{Router, routing::get};
use axum_helpers::errors::responses::{
    BadRequestResponse, ConflictResponse, NotFoundResponse, ValidationErrorResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{User, UserPayload, UserRole};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        endpoints::list_users,
        endpoints::find_user_by_email,
        endpoints::get_user,
        endpoints::create_user,
        endpoints::update_user,
        endpoints::delete_user,
    ),
    components(
        schemas(User, UserPayload, UserRole),
        responses(BadRequestResponse, ConflictResponse, NotFoundResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// User routes, to be nested under `/users`
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(endpoints::list_users).post(endpoints::create_user))
        .route("/search", get(endpoints::find_user_by_email))
        .route(
            "/{id}",
            get(endpoints::get_user)
                .put(endpoints::update_user)
                .delete(endpoints::delete_user),
        )
        .with_state(shared_service)
}
