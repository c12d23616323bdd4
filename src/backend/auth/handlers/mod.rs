//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── users.rs    - List users handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - User authentication
//! - **`list_users`** - GET /users - Current user and all users (bearer token)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// List users handler
pub mod users;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, SignupRequest, UsersResponse};

// Re-export handlers
pub use login::login;
pub use signup::signup;
pub use users::list_users;
