use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use axum_helpers::not_blank;

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task not started
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Task in progress
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Task completed
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Task entity - represents a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned on creation
    pub id: i64,
    /// Task title
    pub title: String,
    /// Optional task description
    pub description: Option<String>,
    /// Task status
    pub status: TaskStatus,
    /// Id of the user the task is assigned to
    pub assigned_to: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Replace the client-editable fields with the payload's values.
    ///
    /// `id`, `created_at` and `assigned_to` are kept. Call only with a payload
    /// that passed validation.
    pub fn apply_payload(&mut self, payload: TaskPayload) {
        self.title = payload.title;
        self.description = payload.description;
        self.status = payload.status.unwrap_or_default();
    }
}

/// A validated task that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<i64>,
    pub created_at: DateTime<Utc>,
}

fn default_status() -> Option<TaskStatus> {
    Some(TaskStatus::default())
}

/// Request body for creating or replacing a task
///
/// A missing `status` key means `PENDING`; an explicit `null` is a violation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TaskPayload {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Title is required"),
        length(min = 3, max = 100, message = "Title must be between 3 and 100 characters")
    )]
    pub title: String,

    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,

    #[serde(default = "default_status")]
    #[validate(required(message = "Status is required"))]
    pub status: Option<TaskStatus>,

    /// Owner id; only read on create
    pub assigned_to: Option<i64>,
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: Some(task.status),
            assigned_to: task.assigned_to,
        }
    }
}

/// Query filters for listing tasks; `status` wins when both are given
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilter {
    /// Only tasks with this status
    pub status: Option<TaskStatus>,
    /// Only tasks assigned to this user id
    pub owner: Option<i64>,
}

/// Query for title search
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleSearch {
    /// Case-insensitive substring of the title
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(TaskStatus::Completed.to_string(), "COMPLETED");
        assert_eq!("PENDING".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
    }

    #[test]
    fn test_payload_missing_status_defaults_to_pending() {
        let payload: TaskPayload = serde_json::from_str(r#"{"title":"Write docs"}"#).unwrap();
        assert_eq!(payload.status, Some(TaskStatus::Pending));
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_payload_explicit_null_status_is_absent() {
        let payload: TaskPayload =
            serde_json::from_str(r#"{"title":"Write docs","status":null}"#).unwrap();
        assert_eq!(payload.status, None);
    }

    #[test]
    fn test_apply_payload_keeps_identity_and_owner() {
        let created_at = Utc::now();
        let mut task = Task {
            id: 7,
            title: "Old title".to_string(),
            description: Some("old".to_string()),
            status: TaskStatus::Pending,
            assigned_to: Some(3),
            created_at,
        };

        task.apply_payload(TaskPayload {
            title: "New title".to_string(),
            description: None,
            status: Some(TaskStatus::Completed),
            assigned_to: Some(99),
        });

        assert_eq!(task.id, 7);
        assert_eq!(task.title, "New title");
        assert_eq!(task.description, None);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.assigned_to, Some(3));
        assert_eq!(task.created_at, created_at);
    }
}
