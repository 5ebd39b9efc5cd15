use hotel_backend::config::db::{DbKind, RuntimeEnv};
use hotel_backend::db::require_db;
use hotel_backend::infra::db::bootstrap_db;
use migration::count_applied_migrations;

#[tokio::test]
async fn memory_db_is_migrated_on_the_returned_pool() -> Result<(), Box<dyn std::error::Error>> {
    let conn = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory).await?;
    assert_eq!(count_applied_migrations(&conn).await?, 1);
    Ok(())
}

#[tokio::test]
async fn memory_databases_are_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let first = crate::support::build_test_state().await?;
    let second = crate::support::build_test_state().await?;

    hotel_backend::repos::guests::create_guest(require_db(&first)?, "Only here", 1).await?;

    let in_second = hotel_backend::repos::guests::exists(require_db(&second)?, 1).await?;
    assert!(!in_second);
    Ok(())
}
