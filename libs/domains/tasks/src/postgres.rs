use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::TaskResult,
    models::{NewTask, Task, TaskStatus},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select(&self, condition: Condition) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .filter(condition)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// `%keyword%` with LIKE metacharacters escaped by `\`.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn insert(&self, new: NewTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = new.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        self.select(Condition::all()).await
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        self.select(Condition::all().add(entity::Column::Status.eq(status)))
            .await
    }

    async fn find_by_owner(&self, user_id: i64) -> TaskResult<Vec<Task>> {
        self.select(Condition::all().add(entity::Column::AssignedTo.eq(user_id)))
            .await
    }

    async fn find_by_title_contains(&self, keyword: &str) -> TaskResult<Vec<Task>> {
        let pattern = LikeExpr::new(contains_pattern(keyword)).escape('\\');
        self.select(Condition::all().add(Expr::col(entity::Column::Title).ilike(pattern)))
            .await
    }

    async fn save(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;
        let active_model: entity::ActiveModel = task.into();

        // Update in place, fall back to insert for ids that are not stored yet
        let model = match active_model.clone().update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => active_model.insert(&self.db).await?,
            Err(e) => return Err(e.into()),
        };

        tracing::info!(task_id = id, "Saved task");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> TaskResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(())
    }
}
