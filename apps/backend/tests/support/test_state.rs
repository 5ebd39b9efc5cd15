use std::env;
use std::env::VarError;
use std::str::FromStr;

use hotel_backend::{build_state, AppError, AppState, DbKind, RuntimeEnv, StateBuilder};

fn read_env_db_kind() -> Result<Option<String>, AppError> {
    match env::var("HOTEL_TEST_DB_KIND") {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(AppError::config(format!(
            "failed to read HOTEL_TEST_DB_KIND: {err}"
        ))),
    }
}

/// Engine for test state; every test gets a fresh in-memory SQLite
/// database unless `HOTEL_TEST_DB_KIND` says otherwise.
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    let resolved = match read_env_db_kind()? {
        Some(ref raw) => DbKind::from_str(raw.as_str())?,
        None => DbKind::SqliteMemory,
    };
    Ok(resolved)
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    let db_kind = resolve_test_db_kind()?;
    Ok(build_state().with_env(RuntimeEnv::Test).with_db(db_kind))
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder()?.build().await
}
