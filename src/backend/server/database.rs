//! SQLite connection pool and schema migrations
//!
//! Migrations live in `migrations/` at the crate root and are embedded at
//! compile time. Running them on an up-to-date database is a no-op.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Open a pool for `url`, creating the database file if needed
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    if url.contains(":memory:") {
        return connect_in_memory().await;
    }

    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Open a private in-memory database
///
/// Each SQLite in-memory connection is its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect_in_memory().await.expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}
