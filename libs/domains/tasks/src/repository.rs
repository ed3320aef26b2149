use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{NewTask, Task, TaskStatus};

/// Repository trait for Task persistence
///
/// Services depend on this trait only; [`InMemoryTaskRepository`] and
/// [`PgTaskRepository`](crate::PgTaskRepository) implement it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task under a freshly assigned id
    async fn insert(&self, task: NewTask) -> TaskResult<Task>;

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// All tasks, ordered by id
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>>;

    /// Tasks whose `assigned_to` is `user_id`
    async fn find_by_owner(&self, user_id: i64) -> TaskResult<Vec<Task>>;

    /// Case-insensitive substring match on the title; wildcards match literally
    async fn find_by_title_contains(&self, keyword: &str) -> TaskResult<Vec<Task>>;

    /// Insert or replace the task stored under `task.id`
    async fn save(&self, task: Task) -> TaskResult<Task>;

    /// Remove the task if present; absent ids are not an error
    async fn delete_by_id(&self, id: i64) -> TaskResult<()>;
}

#[derive(Default)]
struct Store {
    tasks: BTreeMap<i64, Task>,
    last_id: i64,
}

/// In-memory task storage, used when no database is configured and in tests
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        let store = self.store.read().await;
        store
            .tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, new: NewTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let task = Task {
            id: store.last_id,
            title: new.title,
            description: new.description,
            status: new.status,
            assigned_to: new.assigned_to,
            created_at: new.created_at,
        };
        store.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Created task");
        Ok(task)
    }

    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let store = self.store.read().await;
        Ok(store.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        Ok(self.filtered(|task| task.status == status).await)
    }

    async fn find_by_owner(&self, user_id: i64) -> TaskResult<Vec<Task>> {
        Ok(self
            .filtered(|task| task.assigned_to == Some(user_id))
            .await)
    }

    async fn find_by_title_contains(&self, keyword: &str) -> TaskResult<Vec<Task>> {
        let needle = keyword.to_lowercase();
        Ok(self
            .filtered(|task| task.title.to_lowercase().contains(&needle))
            .await)
    }

    async fn save(&self, task: Task) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        // Keep later inserts from reusing an explicitly saved id
        store.last_id = store.last_id.max(task.id);
        store.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, "Saved task");
        Ok(task)
    }

    async fn delete_by_id(&self, id: i64) -> TaskResult<()> {
        let mut store = self.store.write().await;
        if store.tasks.remove(&id).is_some() {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_task(title: &str, status: TaskStatus, assigned_to: Option<i64>) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            status,
            assigned_to,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.insert(new_task("First", TaskStatus::Pending, None)).await.unwrap();
        let second = repo.insert(new_task("Second", TaskStatus::Pending, None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(first));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryTaskRepository::new();
        for title in ["c task", "a task", "b task"] {
            repo.insert(new_task(title, TaskStatus::Pending, None)).await.unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_filters() {
        let repo = InMemoryTaskRepository::new();
        repo.insert(new_task("Write report", TaskStatus::Pending, Some(1))).await.unwrap();
        repo.insert(new_task("Review REPORT", TaskStatus::Completed, Some(2))).await.unwrap();
        repo.insert(new_task("Deploy", TaskStatus::InProgress, Some(1))).await.unwrap();

        let pending = repo.find_by_status(TaskStatus::Pending).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Write report");

        let owned = repo.find_by_owner(1).await.unwrap();
        assert_eq!(owned.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(repo.find_by_owner(7).await.unwrap().is_empty());

        let found = repo.find_by_title_contains("report").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_title_search_treats_wildcards_literally() {
        let repo = InMemoryTaskRepository::new();
        repo.insert(new_task("100% done", TaskStatus::Pending, None)).await.unwrap();
        repo.insert(new_task("1000 done", TaskStatus::Pending, None)).await.unwrap();

        let found = repo.find_by_title_contains("0%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "100% done");
        assert!(repo.find_by_title_contains("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_and_upserts() {
        let repo = InMemoryTaskRepository::new();
        let mut task = repo.insert(new_task("Draft", TaskStatus::Pending, None)).await.unwrap();

        task.status = TaskStatus::Completed;
        repo.save(task.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(task.id).await.unwrap(), Some(task.clone()));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        let mut detached = task.clone();
        detached.id = 10;
        repo.save(detached).await.unwrap();
        let next = repo.insert(new_task("Next", TaskStatus::Pending, None)).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.insert(new_task("Temp", TaskStatus::Pending, None)).await.unwrap();

        repo.delete_by_id(task.id).await.unwrap();
        assert_eq!(repo.find_by_id(task.id).await.unwrap(), None);
        repo.delete_by_id(task.id).await.unwrap();
        repo.delete_by_id(999).await.unwrap();
    }
}
