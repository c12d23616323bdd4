/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup, login and users handlers.
 * Missing or `null` string fields deserialize as empty and are rejected by
 * validation rather than by the JSON extractor.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserSummary;
use crate::shared::tweet::null_as_empty;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    /// Plaintext password (hashed before storage)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    /// JWT bearer token
    pub token: String,
}

/// Users response
///
/// Contains the caller's username and every registered user, without
/// password hashes.
#[derive(Serialize, Deserialize, Debug)]
pub struct UsersResponse {
    pub current_user: String,
    pub users: Vec<UserSummary>,
}
