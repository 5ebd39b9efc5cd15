use db_infra::config::db::{validate_db_config, DbKind, RuntimeEnv};
use db_infra::{build_pool, orchestrate_migration, orchestrate_migration_internal};
use migration::MigrationCommand;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::AppError;

/// Connect the application pool and bring the schema up to date.
///
/// An in-memory SQLite database lives inside its single connection, so it is
/// migrated on the very pool that gets returned. Every other engine is
/// migrated through a separate owner-credential pool first.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    validate_db_config(env, db_kind)?;

    info!(
        "bootstrap=start env={:?} db_kind={:?} pid={}",
        env,
        db_kind,
        std::process::id()
    );

    let pool = match db_kind {
        DbKind::SqliteMemory => {
            let pool = build_pool(env, db_kind).await?;
            orchestrate_migration_internal(&pool, env, db_kind, MigrationCommand::Up).await?;
            pool
        }
        DbKind::Postgres | DbKind::SqliteFile => {
            orchestrate_migration(env, db_kind, MigrationCommand::Up).await?;
            build_pool(env, db_kind).await?
        }
    };

    info!("bootstrap=ready");
    Ok(pool)
}
