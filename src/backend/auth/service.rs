/**
 * Authentication Service
 *
 * `AuthService` is what handlers and the auth middleware talk to. It
 * combines the credential store with the token keys:
 *
 * - `login` verifies credentials and mints a token
 * - `resolve_identity` turns a bearer token back into an `Identity`
 * - `authorize` applies the ownership rule
 *
 * Every request re-derives its identity from its token; nothing about a
 * session is kept between requests.
 */

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::identity::{self, Access, Identity};
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::{UserId, UserSummary};
use crate::backend::error::BackendError;

/// Credential verification, token issuance and identity resolution
#[derive(Clone)]
pub struct AuthService {
    credentials: CredentialStore,
    keys: TokenKeys,
}

impl AuthService {
    pub fn new(credentials: CredentialStore, keys: TokenKeys) -> Self {
        Self { credentials, keys }
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, BackendError> {
        self.credentials.register(username, password).await
    }

    /// Verify credentials and issue a token
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<String, BackendError> {
        let identity = self
            .credentials
            .verify(username, password)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Invalid credentials for user: {}", username);
                BackendError::InvalidCredentials
            })?;

        Ok(self.keys.create_token(identity.as_str())?)
    }

    /// Resolve a bearer token to the identity it was issued for
    ///
    /// # Errors
    ///
    /// * `Unauthenticated` - token missing, malformed, badly signed or expired
    pub fn resolve_identity(&self, token: Option<&str>) -> Result<Identity, BackendError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BackendError::unauthenticated("Missing token"))?;

        let claims = self
            .keys
            .verify_token(token)
            .map_err(|e| BackendError::unauthenticated(format!("Invalid token: {}", e)))?;

        if claims.sub.is_empty() {
            return Err(BackendError::unauthenticated("Token has no subject"));
        }

        Ok(Identity::new(claims.sub))
    }

    /// Ownership check used before any tweet update or delete
    pub fn authorize(&self, identity: &Identity, resource_owner: &str) -> Access {
        identity::authorize(identity, resource_owner)
    }

    /// All registered users
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, BackendError> {
        self.credentials.list().await
    }
}
