use chrono::Utc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserPayload};
use crate::repository::UserRepository;
use crate::validation;

/// User service - business logic layer
pub struct UserService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn check(payload: &UserPayload) -> UserResult<()> {
        let violations = validation::violations(payload);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(UserError::Validation(violations))
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_by_id(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository.find_by_email(email).await
    }

    /// Validate, reject a taken email, then store with role defaulting to `USER`.
    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn create(&self, payload: UserPayload) -> UserResult<User> {
        Self::check(&payload)?;

        if self.repository.find_by_email(&payload.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(payload.email));
        }

        let new = NewUser {
            name: payload.name,
            email: payload.email,
            role: payload.role.unwrap_or_default(),
            created_at: Utc::now(),
        };

        self.repository.insert(new).await
    }

    /// Replace name, email and role. Keeping one's own email is not a conflict.
    #[instrument(skip(self, payload), fields(user_id = %id))]
    pub async fn update(&self, id: i64, payload: UserPayload) -> UserResult<User> {
        Self::check(&payload)?;

        let mut user = self.get_by_id(id).await?;

        if let Some(owner) = self.repository.find_by_email(&payload.email).await? {
            if owner.id != id {
                return Err(UserError::DuplicateEmail(payload.email));
            }
        }

        user.apply_payload(payload);
        self.repository.save(user).await
    }

    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete(&self, id: i64) -> UserResult<()> {
        let user = self.get_by_id(id).await?;
        self.repository.delete_by_id(user.id).await
    }
}
