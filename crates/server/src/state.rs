use sea_orm::DatabaseConnection;

/// Shared handler state. The connection pool is created by [`crate::startup::run`]
/// (or a test harness) and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
