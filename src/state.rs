use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub orm: Option<Arc<DatabaseConnection>>,
}

impl AppState {
    pub fn new(orm: Option<DatabaseConnection>) -> Self {
        Self {
            orm: orm.map(Arc::new),
        }
    }

    pub fn without_database() -> Self {
        Self { orm: None }
    }

    /// Connection for endpoints that must fail when no database is configured.
    pub fn db(&self) -> AppResult<&DatabaseConnection> {
        self.orm.as_deref().ok_or(AppError::DatabaseUnavailable)
    }

    /// Connection for read endpoints, which degrade to empty results instead.
    pub fn try_db(&self) -> Option<&DatabaseConnection> {
        self.orm.as_deref()
    }
}
