//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the SQLite database.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
