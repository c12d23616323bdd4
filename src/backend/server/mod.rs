//! Server Module
//!
//! Configuration, persistence bootstrap and shared state for the HTTP server.
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`database`** - SQLite pool and embedded migrations
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - `create_app`, which wires everything into a `Router`

/// Server configuration loading
pub mod config;

/// SQLite pool and migrations
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, InitError};
pub use state::AppState;
