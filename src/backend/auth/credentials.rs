/**
 * Credential Store
 *
 * Registration and credential verification on top of a `UserStore`.
 * Passwords are hashed with bcrypt on the way in and checked against the
 * stored hash on the way out; the plaintext is never persisted or logged.
 */

use std::sync::Arc;

use bcrypt::hash;

use crate::backend::auth::identity::Identity;
use crate::backend::auth::users::{UserId, UserStore, UserSummary};
use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Username → password-hash records with uniqueness enforced
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl CredentialStore {
    /// Create a credential store over `users`, hashing with `bcrypt_cost`
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `SharedError::ValidationError` - empty username or password
    /// * `Conflict` - username already taken
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, BackendError> {
        if username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username must not be empty").into());
        }
        if password.is_empty() {
            return Err(SharedError::validation("password", "Password must not be empty").into());
        }

        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!("Username already exists: {}", username);
            return Err(BackendError::conflict(username));
        }

        let password_hash = hash(password, self.bcrypt_cost)?;

        // A concurrent signup can win the race between the lookup and the insert.
        match self.users.insert_user(username, &password_hash).await {
            Ok(id) => Ok(id),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::warn!("Username already exists: {}", username);
                Err(BackendError::conflict(username))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username/password pair
    ///
    /// Returns `None` for an unknown user or a wrong password.
    pub async fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, BackendError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(Identity::new(user.username)))
        } else {
            Ok(None)
        }
    }

    /// All registered users
    pub async fn list(&self) -> Result<Vec<UserSummary>, BackendError> {
        Ok(self.users.list_users().await?)
    }
}
