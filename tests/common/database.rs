//! Database test fixtures
//!
//! Every fixture gets its own in-memory SQLite database with migrations
//! applied, so tests never share rows.

use axum_test::TestServer;
use sqlx::SqlitePool;
use tweet_api::backend::routes::create_router;
use tweet_api::backend::server::database::{connect_in_memory, run_migrations};
use tweet_api::backend::{AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with a fixed secret and the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("Failed to build test config")
}

/// Create a migrated in-memory pool
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Full router over this database
    pub fn server(&self) -> TestServer {
        let state = AppState::new(self.pool.clone(), &test_config());
        TestServer::new(create_router(state)).expect("Failed to create test server")
    }
}

/// Router over a fresh database
pub async fn create_test_server() -> TestServer {
    TestDatabase::new().await.server()
}
