/**
 * Server Initialization
 *
 * 1. Open the SQLite pool (file created if missing)
 * 2. Apply migrations
 * 3. Build `AppState`
 * 4. Build the router
 *
 * Any failure here aborts startup.
 */

use axum::Router;
use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::{connect, run_migrations};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] MigrateError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing tweet API backend");

    let pool = connect(&config.database_url).await.inspect_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
    })?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await.inspect_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
    })?;

    let app = create_router(AppState::new(pool, config));
    tracing::info!("Router configured");

    Ok(app)
}
