//! Middleware Module
//!
//! HTTP middleware that runs before handlers.
//!
//! - **`auth`** - Resolves the bearer token to an identity and rejects the
//!   request with 401 before any business logic runs
//! - **`extract`** - `Json`/`Path` wrappers whose rejections render as
//!   `BackendError` JSON bodies
//!
//! # Example
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/tweet", post(post_tweet))
//!     .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));
//! ```

pub mod auth;
pub mod extract;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use extract::{ApiJson, ApiPath};
