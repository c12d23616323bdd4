/**
 * Backend Error Types
 *
 * This module defines `BackendError`, the single error type produced by the
 * auth and tweet services and returned from handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Duplicate username on signup
 * - Bad credentials on login
 * - Missing, malformed or expired bearer token
 * - Mutating a tweet owned by someone else
 * - Unknown tweet id
 * - Invalid request fields or tweet content
 * - Bodies or path parameters the extractors could not parse
 *
 * ## Server Errors
 *
 * - Database failures (connection loss, constraint surprises)
 * - Password hashing failures
 * - Token signing failures
 *
 * Server errors are never shown to the client verbatim.
 */

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use tweet_api::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::unauthenticated("Missing Authorization header");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// assert_eq!(err.code(), "unauthenticated");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The username is already registered
    #[error("User already exists: {username}")]
    Conflict {
        /// The rejected username
        username: String,
    },

    /// Username/password pair did not match a stored user
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, badly signed or expired
    #[error("Unauthenticated: {reason}")]
    Unauthenticated {
        /// Why the token was rejected (logged, not returned)
        reason: String,
    },

    /// Valid identity, but not the owner of the tweet
    #[error("User {identity} may not modify tweet {tweet_id}")]
    Forbidden {
        identity: String,
        tweet_id: i64,
    },

    /// No tweet with this id
    #[error("Tweet {tweet_id} not found")]
    NotFound {
        tweet_id: i64,
    },

    /// Request body or path could not be extracted
    #[error("Malformed request: {reason}")]
    MalformedRequest {
        /// Status chosen by the rejecting extractor (400, 415 or 422)
        status: StatusCode,
        reason: String,
    },

    /// Validation error from the shared rules
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a conflict error for a taken username
    pub fn conflict(username: impl Into<String>) -> Self {
        Self::Conflict {
            username: username.into(),
        }
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(identity: impl Into<String>, tweet_id: i64) -> Self {
        Self::Forbidden {
            identity: identity.into(),
            tweet_id,
        }
    }

    /// Create a not-found error for a tweet id
    pub fn not_found(tweet_id: i64) -> Self {
        Self::NotFound { tweet_id }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedRequest { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Conflict { .. } => "user_exists",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthenticated { .. } => "unauthenticated",
            Self::Forbidden { .. } => "forbidden",
            Self::NotFound { .. } => "not_found",
            Self::MalformedRequest { .. } => "invalid_request",
            Self::SharedError(SharedError::InvalidContent { .. }) => "invalid_content",
            Self::SharedError(SharedError::ValidationError { .. }) => "invalid_input",
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => "internal_error",
        }
    }

    /// Human-readable message safe to return to clients
    pub fn message(&self) -> String {
        match self {
            Self::Conflict { .. } => "User already exists".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Unauthenticated { .. } => "Missing or invalid token".to_string(),
            Self::Forbidden { .. } => "Unauthorized".to_string(),
            Self::NotFound { .. } => "Tweet not found".to_string(),
            Self::MalformedRequest { reason, .. } => reason.clone(),
            Self::SharedError(SharedError::InvalidContent { .. }) => {
                "Invalid tweet content".to_string()
            }
            Self::SharedError(err) => err.to_string(),
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Whether this is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}
