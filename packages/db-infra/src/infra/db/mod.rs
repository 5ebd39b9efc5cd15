pub mod core;

pub use core::{build_admin_pool, build_pool, orchestrate_migration, orchestrate_migration_internal};
