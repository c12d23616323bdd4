//! Route Configuration Module
//!
//! - **`router`** - Main router creation, banner, fallback and layers
//! - **`api_routes`** - Public and bearer-protected API endpoints
//!
//! # Routes
//!
//! | Method | Path          | Auth   |
//! |--------|---------------|--------|
//! | GET    | `/`           | none   |
//! | POST   | `/signup`     | none   |
//! | POST   | `/login`      | none   |
//! | GET    | `/tweets`     | none   |
//! | POST   | `/tweet`      | bearer |
//! | PUT    | `/tweet/{id}` | bearer |
//! | DELETE | `/tweet/{id}` | bearer |
//! | GET    | `/users`      | bearer |

/// Main router creation
pub mod router;

/// API endpoints
pub mod api_routes;

pub use router::create_router;
