use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

/// Runtime environment selects database names and safety rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeEnv {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Database engine and storage mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unknown database kind '{other}' (expected postgres | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// What a pool is used for; migrations get a single connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolPurpose {
    Runtime,
    Migration,
}

/// Pool sizing and timeouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_ms: u64,
}

pub fn build_connection_settings(
    env: RuntimeEnv,
    db_kind: DbKind,
    purpose: PoolPurpose,
) -> ConnectionSettings {
    let acquire_timeout_ms = match env {
        RuntimeEnv::Test => 5_000,
        RuntimeEnv::Prod => 2_000,
    };

    // Each connection to sqlite::memory: opens its own private database.
    let (min_connections, max_connections) = match (db_kind, purpose) {
        (DbKind::SqliteMemory, _) | (_, PoolPurpose::Migration) => (1, 1),
        (DbKind::SqliteFile, PoolPurpose::Runtime) => (1, 4),
        (DbKind::Postgres, PoolPurpose::Runtime) => (1, 10),
    };

    ConnectionSettings {
        max_connections,
        min_connections,
        acquire_timeout_ms,
    }
}

/// Build the connection string for the given environment, engine and owner.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_spec(db_kind, env)?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Path of the SQLite database file for the environment.
pub fn sqlite_file_spec(db_kind: DbKind, env: RuntimeEnv) -> Result<String, DbInfraError> {
    if db_kind != DbKind::SqliteFile {
        return Err(DbInfraError::config(format!(
            "sqlite_file_spec only applies to SqliteFile, got {db_kind:?}"
        )));
    }

    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data/sqlite".to_string());
    let file = match env {
        RuntimeEnv::Prod => "hotel.db",
        RuntimeEnv::Test => "hotel_test.db",
    };
    let path: PathBuf = [dir.as_str(), file].iter().collect();
    Ok(path.to_string_lossy().into_owned())
}

/// Reject configurations that could point tests at a real database.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if db_kind == DbKind::Postgres {
        // db_name enforces the _test suffix for the Test profile
        db_name(env)?;
    }
    Ok(())
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("HOTEL_OWNER_USER")?,
            must_var("HOTEL_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
