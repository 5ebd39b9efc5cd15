//! Database settings live in `db-infra` so the migration CLI and the server
//! resolve connection strings the same way.

pub use db_infra::config::db::{
    build_connection_settings, make_conn_spec, sqlite_file_spec, validate_db_config,
    ConnectionSettings, DbKind, DbOwner, PoolPurpose, RuntimeEnv,
};
