use chrono::Utc;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::{NewTask, Task, TaskPayload, TaskStatus};
use crate::repository::TaskRepository;
use crate::validation;

/// Task service - business logic layer
pub struct TaskService<R: TaskRepository> {
    repository: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn check(payload: &TaskPayload) -> TaskResult<()> {
        let violations = validation::violations(payload);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(TaskError::Validation(violations))
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> TaskResult<Vec<Task>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_by_id(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Validate and store a new task; a missing status means `PENDING`.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: TaskPayload) -> TaskResult<Task> {
        Self::check(&payload)?;

        let new = NewTask {
            title: payload.title,
            description: payload.description,
            status: payload.status.unwrap_or_default(),
            assigned_to: payload.assigned_to,
            created_at: Utc::now(),
        };

        self.repository.insert(new).await
    }

    /// Replace title, description and status of an existing task.
    ///
    /// Validation runs before the lookup, so an invalid payload for an unknown
    /// id reports the violations.
    #[instrument(skip(self, payload), fields(task_id = %id))]
    pub async fn update(&self, id: i64, payload: TaskPayload) -> TaskResult<Task> {
        Self::check(&payload)?;

        let mut task = self.get_by_id(id).await?;
        task.apply_payload(payload);

        self.repository.save(task).await
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: i64) -> TaskResult<()> {
        let task = self.get_by_id(id).await?;
        self.repository.delete_by_id(task.id).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_title(&self, keyword: &str) -> TaskResult<Vec<Task>> {
        self.repository.find_by_title_contains(keyword).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_owner(&self, user_id: i64) -> TaskResult<Vec<Task>> {
        self.repository.find_by_owner(user_id).await
    }

    #[instrument(skip(self, status), fields(status = %status))]
    pub async fn get_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        self.repository.find_by_status(status).await
    }
}
