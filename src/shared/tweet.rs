/**
 * Tweet Data Structures
 *
 * This module defines the JSON bodies exchanged on the tweet endpoints and
 * the content rule every stored tweet satisfies.
 *
 * Content length is counted in Unicode scalar values (`char`s), not bytes,
 * so a 280-character tweet of emoji is accepted.
 */
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::error::SharedError;

/// Maximum tweet length in characters
pub const MAX_TWEET_CHARS: usize = 280;

/// A tweet as returned by `GET /tweets`
///
/// # Fields
/// * `id` - Tweet ID (monotonically increasing)
/// * `user` - Author's username
/// * `content` - Tweet text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TweetView {
    pub id: i64,
    pub user: String,
    pub content: String,
}

/// Body of `POST /tweet`
///
/// A missing or `null` `content` field deserializes to an empty string and
/// is then rejected by [`validate_content`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateTweetRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Body of `PUT /tweet/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTweetRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Deserialize a string field, reading JSON `null` as `""`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of `POST /tweet`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TweetPostedResponse {
    pub message: String,
    pub tweet_id: i64,
}

/// Check that tweet content is between 1 and [`MAX_TWEET_CHARS`] characters
///
/// # Example
/// ```rust
/// use tweet_api::shared::validate_content;
///
/// assert!(validate_content("hello").is_ok());
/// assert!(validate_content("").is_err());
/// assert!(validate_content(&"x".repeat(281)).is_err());
/// ```
pub fn validate_content(content: &str) -> Result<(), SharedError> {
    let chars = content.chars().count();
    if chars == 0 || chars > MAX_TWEET_CHARS {
        return Err(SharedError::invalid_content(chars, MAX_TWEET_CHARS));
    }
    Ok(())
}
