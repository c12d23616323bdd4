//! Generic response bodies.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body returned by signup, update and delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
