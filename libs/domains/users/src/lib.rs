//! Users Domain
//!
//! Same layering as the tasks domain: handlers on top of [`UserService`],
//! which depends only on the [`UserRepository`] trait. Email addresses are
//! unique across users; the service enforces it on create and update and
//! reports clashes as [`UserError::DuplicateEmail`].
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserRepository, UserService, handlers};
//!
//! let routes = handlers::router(UserService::new(InMemoryUserRepository::new()));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{EmailLookup, NewUser, User, UserPayload, UserRole};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
