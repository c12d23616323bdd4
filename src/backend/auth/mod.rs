//! Authentication Module
//!
//! This module handles user registration, credential verification, token
//! issuance and identity resolution. It is the only part of the backend
//! that decides who a request belongs to and whether that caller may
//! modify a resource.
//!
//! # Architecture
//!
//! - **`users`** - User rows and the `UserStore` persistence trait
//! - **`credentials`** - Credential store: registration and password checks
//! - **`sessions`** - JWT token signing and verification
//! - **`identity`** - The `Identity` type and the ownership rule
//! - **`service`** - `AuthService`, the facade handlers talk to
//! - **`handlers`** - HTTP handlers for `/signup`, `/login` and `/users`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── credentials.rs  - Registration and credential verification
//! ├── sessions.rs     - JWT token management
//! ├── identity.rs     - Identity and authorization rule
//! ├── service.rs      - AuthService
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password → password hashed → user stored
//! 2. **Login**: username + password → hash verified → JWT returned
//! 3. **Authenticated request**: `Authorization: Bearer <jwt>` → signature
//!    and expiry checked → username becomes the request's identity
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless and carry an expiry (30 days by default)
//! - Bad login and bad token are both 401 but carry distinct error codes

/// User data model and database operations
pub mod users;

/// Registration and credential verification
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// Identity and the ownership rule
pub mod identity;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::CredentialStore;
pub use handlers::{list_users, login, signup};
pub use identity::{authorize, Access, Identity};
pub use service::AuthService;
pub use sessions::{Claims, TokenKeys};
pub use users::{SqliteUserStore, UserStore, UserSummary};
