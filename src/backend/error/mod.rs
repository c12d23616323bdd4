//! Backend Error Module
//!
//! This module defines the error type returned by every service and HTTP
//! handler in the backend, and its conversion into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! | Variant | Status | Code |
//! |---|---|---|
//! | `Conflict` | 409 | `user_exists` |
//! | `InvalidCredentials` | 401 | `invalid_credentials` |
//! | `Unauthenticated` | 401 | `unauthenticated` |
//! | `Forbidden` | 403 | `forbidden` |
//! | `NotFound` | 404 | `not_found` |
//! | `MalformedRequest` | 400/415/422 | `invalid_request` |
//! | `SharedError::InvalidContent` | 400 | `invalid_content` |
//! | `SharedError::ValidationError` | 400 | `invalid_input` |
//! | `Database` / `PasswordHash` / `Token` | 500 | `internal_error` |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
