use db_infra::config::db::RuntimeEnv;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that exercise non-DB paths)
    db: Option<DatabaseConnection>,
    env: RuntimeEnv,
}

impl AppState {
    pub fn new(db: DatabaseConnection, env: RuntimeEnv) -> Self {
        Self { db: Some(db), env }
    }

    pub fn without_db(env: RuntimeEnv) -> Self {
        Self { db: None, env }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn env(&self) -> RuntimeEnv {
        self.env
    }
}
