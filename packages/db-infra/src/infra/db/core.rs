use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use tracing::{info, trace, warn};

use crate::config::db::{
    build_connection_settings, make_conn_spec, sqlite_file_spec, validate_db_config,
    ConnectionSettings, DbKind, DbOwner, PoolPurpose, RuntimeEnv,
};
use crate::error::DbInfraError;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt after all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        DbInfraError::connect("no error recorded after max attempts (this should not happen)")
    }))
}

async fn connect_with(
    url: &str,
    db_kind: DbKind,
    settings: &ConnectionSettings,
    label: &'static str,
) -> Result<DatabaseConnection, DbInfraError> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .sqlx_logging(false);

    if db_kind == DbKind::SqliteMemory {
        // Recycling the only connection would discard the in-memory database.
        let forever = Duration::from_secs(60 * 60 * 24 * 365);
        opt.idle_timeout(forever).max_lifetime(forever);
    }

    // sqlx turns on PRAGMA foreign_keys for every SQLite connection it opens.
    let pool = if db_kind == DbKind::Postgres {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        DbInfraError::connect(format!("failed to connect to Postgres ({label}): {e}"))
                    })
                }
            },
            5,
            500,
        )
        .await?
    } else {
        Database::connect(opt).await.map_err(|e| {
            DbInfraError::connect(format!("failed to connect to database ({label}): {e}"))
        })?
    };

    Ok(pool)
}

/// Single-connection pool with owner credentials, used for migrations.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;
    let settings = build_connection_settings(env, db_kind, PoolPurpose::Migration);
    connect_with(&url, db_kind, &settings, "admin pool").await
}

/// Application pool with app credentials.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, DbOwner::App)?;
    let settings = build_connection_settings(env, db_kind, PoolPurpose::Runtime);

    if db_kind == DbKind::SqliteFile {
        ensure_sqlite_dir(env)?;
    }

    info!(
        "pool=about_to_build env={:?} db_kind={:?} engine={} max_connections={}",
        env,
        db_kind,
        get_db_engine(db_kind),
        settings.max_connections
    );
    connect_with(&url, db_kind, &settings, "app pool").await
}

fn ensure_sqlite_dir(env: RuntimeEnv) -> Result<(), DbInfraError> {
    let file = sqlite_file_spec(DbKind::SqliteFile, env)?;
    if let Some(parent) = std::path::Path::new(&file).parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            DbInfraError::config(format!(
                "failed to create sqlite directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Sanitize database URL by masking the password in connection strings.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        // scheme "postgresql:" alone has no password
        Some(colon_pos) if auth_part[..colon_pos].contains("//") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    let (current_count, current_last) = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => (
            migrations.len(),
            migrations.last().map(|m| m.name().to_string()),
        ),
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::migration(format!(
                "failed to get applied migrations: {e}"
            )));
        }
    };

    let is_up_to_date = current_count == expected_count
        && !expected_last.is_empty()
        && current_last.as_deref() == Some(expected_last.as_str());

    trace!(
        fastpath = if is_up_to_date { "hit" } else { "miss" },
        current_count,
        expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );

    Ok(is_up_to_date)
}

/// Connect with owner credentials and run a migration command.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    validate_db_config(env, db_kind)?;
    if db_kind == DbKind::SqliteFile {
        ensure_sqlite_dir(env)?;
    }

    let admin_pool = build_admin_pool(env, db_kind).await?;
    orchestrate_migration_internal(&admin_pool, env, db_kind, command).await
}

/// Run a migration command on an existing pool and verify the result.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let start = Instant::now();
    info!(
        "migrate=start env={:?} db_kind={:?} engine={} cmd={:?}",
        env,
        db_kind,
        get_db_engine(db_kind),
        command
    );

    if command == MigrationCommand::Up && fast_path_schema_check(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    if db_kind == DbKind::SqliteFile {
        setup_sqlite_file_prerequisites(pool).await?;
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::migration(format!("migration execution failed: {e}")))?;

    let expected_count = Migrator::migrations().len();
    let applied_count = Migrator::get_applied_migrations(pool)
        .await
        .map(|m| m.len())
        .unwrap_or(0);

    info!(
        migrate = "counts",
        expected_count,
        applied_count,
        elapsed_ms = start.elapsed().as_millis() as u64
    );

    match command {
        MigrationCommand::Reset if applied_count != 0 => Err(DbInfraError::migration(format!(
            "Migration verification failed: reset should leave 0 migrations applied, but {applied_count} were found (env={env:?}, db_kind={db_kind:?})"
        ))),
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied_count != expected_count =>
        {
            Err(DbInfraError::migration(format!(
                "Migration verification failed: expected {expected_count} migrations, but {applied_count} were applied (env={env:?}, db_kind={db_kind:?})"
            )))
        }
        _ => {
            info!("migrate=done");
            Ok(())
        }
    }
}

async fn setup_sqlite_file_prerequisites(pool: &DatabaseConnection) -> Result<(), DbInfraError> {
    for pragma in ["PRAGMA journal_mode = WAL;", "PRAGMA synchronous = NORMAL;"] {
        pool.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::config(format!("failed to apply `{pragma}`: {e}")))?;
    }
    Ok(())
}
