use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use axum_helpers::not_blank;

/// User roles
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned on creation
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    pub role: UserRole,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Take name, email and role from a validated payload; `id` and
    /// `created_at` are kept.
    pub fn apply_payload(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.role = payload.role.unwrap_or_default();
    }
}

/// A validated user that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> Option<UserRole> {
    Some(UserRole::default())
}

/// Request body for creating or replacing a user
///
/// A missing `role` key means `USER`; an explicit `null` is a violation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(min = 3, max = 50, message = "Name must be between 3 and 50 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email format is invalid")
    )]
    pub email: String,

    #[serde(default = "default_role")]
    #[validate(required(message = "Role is required"))]
    pub role: Option<UserRole>,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role),
        }
    }
}

/// Query for looking a user up by email
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailLookup {
    /// Exact email address
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(UserRole::User.to_string(), "USER");
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }

    #[test]
    fn test_payload_missing_role_defaults_to_user() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"Test User","email":"test@example.com"}"#).unwrap();
        assert_eq!(payload.role, Some(UserRole::User));
    }

    #[test]
    fn test_payload_explicit_null_role_is_absent() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"Test User","email":"a@b.io","role":null}"#).unwrap();
        assert_eq!(payload.role, None);
    }

    #[test]
    fn test_apply_payload_keeps_identity() {
        let created_at = Utc::now();
        let mut user = User {
            id: 4,
            name: "Old Name".to_string(),
            email: "old@example.com".to_string(),
            role: UserRole::User,
            created_at,
        };

        user.apply_payload(UserPayload {
            name: "New Name".to_string(),
            email: "new@example.com".to_string(),
            role: Some(UserRole::Admin),
        });

        assert_eq!(user.id, 4);
        assert_eq!(user.name, "New Name");
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.created_at, created_at);
    }
}
