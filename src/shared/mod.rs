//! Shared Module
//!
//! This module contains the wire types and validation rules that are shared
//! between the server and any Rust client talking to it. Everything here is
//! plain data plus pure functions; nothing touches the database or the
//! network.
//!
//! # Overview
//!
//! - **`tweet`** - Tweet request/response bodies and the content rule
//! - **`error`** - Validation errors raised by the rules in this module
//! - **`response`** - Generic `{message}` response body

/// Tweet data structures and content validation
pub mod tweet;

/// Shared error types
pub mod error;

/// Generic response bodies
pub mod response;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use response::MessageResponse;
pub use tweet::{
    validate_content, CreateTweetRequest, TweetPostedResponse, TweetView, UpdateTweetRequest,
    MAX_TWEET_CHARS,
};
