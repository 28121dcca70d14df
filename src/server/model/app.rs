//! Shared application state.

use sea_orm::DatabaseConnection;

/// Application state shared by all request handlers.
///
/// Constructed once at start-up; the connection is a pooled handle, cloning it is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
