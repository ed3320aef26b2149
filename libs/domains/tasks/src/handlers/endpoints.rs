use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::errors::responses::{BadRequestResponse, NotFoundResponse, ValidationErrorResponse};
use axum_helpers::{IdPath, JsonBody, QueryParams};
use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{Task, TaskFilter, TaskPayload, TitleSearch};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// List tasks, optionally filtered by status or owner
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    params(TaskFilter),
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 400, response = BadRequestResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    QueryParams(filter): QueryParams<TaskFilter>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = match filter {
        TaskFilter {
            status: Some(status),
            ..
        } => service.get_by_status(status).await?,
        TaskFilter {
            owner: Some(owner), ..
        } => service.get_by_owner(owner).await?,
        _ => service.get_all().await?,
    };
    Ok(Json(tasks))
}

/// Search tasks by title
#[utoipa::path(
    get,
    path = "/search",
    tag = "tasks",
    params(TitleSearch),
    responses(
        (status = 200, description = "Tasks whose title contains the keyword", body = Vec<Task>),
        (status = 400, response = BadRequestResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    QueryParams(search): QueryParams<TitleSearch>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.search_by_title(&search.keyword).await?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_by_id(id).await?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace the editable fields of a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<TaskPayload>,
) -> TaskResult<Json<Task>> {
    let task = service.update(id, payload).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
