//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the `/ready` handler and the shutdown cleanup.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL pool; `None` means the in-memory repositories back the API
    pub db: Option<DatabaseConnection>,
}
