//! Shared Error Types
//!
//! This module defines the validation errors raised by the pure rules in
//! `shared`. The backend wraps them in `BackendError` and maps them to a
//! 400 response.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required request field is missing or empty
//! - `InvalidContent` - Tweet content violates the length rule
//!
//! # Usage
//!
//! ```rust
//! use tweet_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username must not be empty");
//! assert!(error.to_string().contains("username"));
//! ```
use thiserror::Error;

/// Validation errors shared by the server and its clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Tweet content is empty or longer than the limit
    #[error("Invalid tweet content: {chars} characters (allowed 1..={max})")]
    InvalidContent {
        /// Length of the rejected content in characters
        chars: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new content error for content of `chars` characters
    pub fn invalid_content(chars: usize, max: usize) -> Self {
        Self::InvalidContent { chars, max }
    }
}
