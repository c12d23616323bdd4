/**
 * Application State Management
 *
 * `AppState` holds the two services every handler needs. The `FromRef`
 * implementations let handlers extract `State<AuthService>` or
 * `State<TweetService>` directly.
 *
 * Both services are cheap to clone: they hold `Arc<dyn Store>` handles over
 * one shared `SqlitePool`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::SqliteUserStore;
use crate::backend::server::config::ServerConfig;
use crate::backend::tweets::db::SqliteTweetStore;
use crate::backend::tweets::service::TweetService;

/// Shared state for the Axum router
#[derive(Clone)]
pub struct AppState {
    /// Credentials, tokens and identity resolution
    pub auth: AuthService,

    /// Tweet CRUD with ownership checks
    pub tweets: TweetService,
}

impl AppState {
    /// Wire the SQLite stores and services together
    pub fn new(pool: SqlitePool, config: &ServerConfig) -> Self {
        let users = Arc::new(SqliteUserStore::new(pool.clone()));
        let credentials = CredentialStore::new(users, config.bcrypt_cost);
        let keys = TokenKeys::new(&config.jwt_secret, config.token_ttl);

        let auth = AuthService::new(credentials, keys);
        let tweets = TweetService::new(Arc::new(SqliteTweetStore::new(pool)), auth.clone());

        Self { auth, tweets }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for TweetService {
    fn from_ref(state: &AppState) -> Self {
        state.tweets.clone()
    }
}

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let config = ServerConfig::builder()
        .jwt_secret("test-secret")
        .bcrypt_cost(4)
        .build()
        .expect("test config");
    AppState::new(crate::backend::server::database::test_pool().await, &config)
}
