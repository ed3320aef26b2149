mod endpoints;

use axum::{Router, routing::get};
use axum_helpers::errors::responses::{BadRequestResponse, NotFoundResponse, ValidationErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Task, TaskPayload, TaskStatus};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        endpoints::list_tasks,
        endpoints::search_tasks,
        endpoints::get_task,
        endpoints::create_task,
        endpoints::update_task,
        endpoints::delete_task,
    ),
    components(
        schemas(Task, TaskPayload, TaskStatus),
        responses(BadRequestResponse, NotFoundResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "tasks", description = "Task management")
    )
)]
pub struct ApiDoc;

/// Task routes, to be nested under `/tasks`
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(endpoints::list_tasks).post(endpoints::create_task))
        .route("/search", get(endpoints::search_tasks))
        .route(
            "/{id}",
            get(endpoints::get_task)
                .put(endpoints::update_task)
                .delete(endpoints::delete_task),
        )
        .with_state(shared_service)
}
