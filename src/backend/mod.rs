//! Backend Module
//!
//! All server-side code: an Axum HTTP server over SQLite that handles
//! signup, login and tweet CRUD with owner-only mutation.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database pool, migrations, `AppState`
//! - **`routes`** - Route table, fallback and tower layers
//! - **`auth`** - Credential store, JWT issuing, identity resolution
//! - **`tweets`** - Tweet store and service
//! - **`middleware`** - Bearer-token guard for protected routes
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── tweets/         - Tweet persistence and service
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` and `CorsLayer` wrap every request
//! 2. Protected routes run `auth_middleware`, which turns the bearer token
//!    into an `Identity` or answers 401
//! 3. Handlers call `AuthService` or `TweetService`
//! 4. Services return `BackendError`, rendered as a JSON error body
//!
//! # Example
//!
//! ```rust,no_run
//! use tweet_api::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Tweet persistence and ownership rules
pub mod tweets;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
