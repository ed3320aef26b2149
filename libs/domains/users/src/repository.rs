use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// Writes that would give two users the same email fail with
/// [`UserError::DuplicateEmail`], checked atomically with the write
/// (in-memory: under the write lock, Postgres: the unique index).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under a freshly assigned id; fails on a taken email
    async fn insert(&self, user: NewUser) -> UserResult<User>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// All users, ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Exact, case-sensitive email match
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Insert or replace the user stored under `user.id`; fails when another
    /// user holds the email
    async fn save(&self, user: User) -> UserResult<User>;

    /// Remove the user if present; absent ids are not an error
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

#[derive(Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Store {
    /// Is `email` held by a user other than `except`?
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory user storage
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;
        if store.email_taken(&new.email, None) {
            return Err(UserError::DuplicateEmail(new.email));
        }
        store.last_id += 1;

        let user = User {
            id: store.last_id,
            name: new.name,
            email: new.email,
            role: new.role,
            created_at: new.created_at,
        };
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let mut store = self.store.write().await;
        if store.email_taken(&user.email, Some(user.id)) {
            return Err(UserError::DuplicateEmail(user.email));
        }
        store.last_id = store.last_id.max(user.id);
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Saved user");
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut store = self.store.write().await;
        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
