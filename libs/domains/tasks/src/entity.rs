use crate::models::{NewTask, Task, TaskStatus};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for Tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<i64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
            assigned_to: model.assigned_to,
            created_at: model.created_at.into(),
        }
    }
}

// The database assigns the id
impl From<NewTask> for ActiveModel {
    fn from(task: NewTask) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status),
            assigned_to: Set(task.assigned_to),
            created_at: Set(task.created_at.into()),
        }
    }
}

impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status),
            assigned_to: Set(task.assigned_to),
            created_at: Set(task.created_at.into()),
        }
    }
}
