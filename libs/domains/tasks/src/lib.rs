//! Tasks Domain
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← axum routes, OpenAPI
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, update/delete semantics
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Task, payloads, status enum
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//! let service = TaskService::new(PgTaskRepository::new(db));
//! let routes = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{NewTask, Task, TaskFilter, TaskPayload, TaskStatus, TitleSearch};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
