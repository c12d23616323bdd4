//! Tweets Module
//!
//! Short text posts owned by the user who created them.
//!
//! # Module Structure
//!
//! ```text
//! tweets/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Tweet rows, queries and the `TweetStore` trait
//! ├── service.rs  - `TweetService`: validation and ownership checks
//! └── handlers.rs - HTTP handlers for /tweets and /tweet/{id}
//! ```
//!
//! # Rules
//!
//! - Content is 1..=280 characters on create and update
//! - Listing is public and newest first (descending id)
//! - Only the author may update or delete a tweet; the author never changes

/// Database operations for tweets
pub mod db;

/// Tweet service
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use db::{SqliteTweetStore, Tweet, TweetId, TweetStore};
pub use handlers::{delete_tweet, list_tweets, post_tweet, update_tweet};
pub use service::TweetService;
