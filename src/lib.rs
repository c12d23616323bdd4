//! Tweet API - Main Library
//!
//! A small social-posting backend: users sign up, log in to receive a JWT,
//! and create, list, edit and delete short text posts ("tweets"). Only the
//! author of a tweet may change or remove it.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation rules usable by any client
//!   - Request/response bodies
//!   - Tweet content rule (1..=280 characters)
//!   - Validation error type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and route table
//!   - Credential store, token issuing and identity resolution
//!   - Tweet store with owner-only mutation
//!   - SQLite persistence via sqlx with embedded migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use tweet_api::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation failures
//! - `backend::BackendError` for everything a handler can return; it maps
//!   to an HTTP status and a stable machine-readable code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
