/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation. Tokens are
 * HS256-signed with the server secret and carry the username as `sub`.
 * Nothing is stored server-side; a token is valid until its `exp`.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    /// Build keys from the shared secret and the token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a JWT token for a user, issued now
    ///
    /// # Arguments
    /// * `username` - Identity to embed as `sub`
    ///
    /// # Returns
    /// JWT token string
    pub fn create_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_at(username, unix_now())
    }

    /// Create a JWT token with an explicit issue time
    ///
    /// Output depends only on the secret, the username and `issued_at`.
    pub fn create_token_at(
        &self,
        username: &str,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: username.to_string(),
            exp: issued_at.saturating_add(self.ttl.as_secs()),
            iat: issued_at,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    ///
    /// Fails on a malformed token, a bad signature or an expired `exp`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
