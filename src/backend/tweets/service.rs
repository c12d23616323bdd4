/**
 * Tweet Service
 *
 * Validation and ownership enforcement on top of a `TweetStore`.
 *
 * Update and delete check, in order: the tweet exists (404), the caller
 * owns it (403), and for update the new content is valid (400). The
 * ownership decision comes from `AuthService::authorize`.
 */

use std::sync::Arc;

use crate::backend::auth::identity::{Access, Identity};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::tweets::db::{Tweet, TweetId, TweetStore};
use crate::shared::validate_content;

/// Tweet CRUD with owner-only mutation
#[derive(Clone)]
pub struct TweetService {
    store: Arc<dyn TweetStore>,
    auth: AuthService,
}

impl TweetService {
    pub fn new(store: Arc<dyn TweetStore>, auth: AuthService) -> Self {
        Self { store, auth }
    }

    /// Create a tweet owned by `author`
    pub async fn create(&self, author: &Identity, content: &str) -> Result<TweetId, BackendError> {
        validate_content(content)?;
        let id = self.store.insert_tweet(author.as_str(), content).await?;
        tracing::info!("Tweet {} posted by {}", id, author);
        Ok(id)
    }

    /// All tweets, newest first
    pub async fn list(&self) -> Result<Vec<Tweet>, BackendError> {
        Ok(self.store.list_tweets().await?)
    }

    /// Replace the content of a tweet owned by `caller`
    pub async fn update(
        &self,
        id: TweetId,
        content: &str,
        caller: &Identity,
    ) -> Result<(), BackendError> {
        self.owned_tweet(id, caller).await?;
        validate_content(content)?;

        if !self.store.update_content(id, content).await? {
            return Err(BackendError::not_found(id));
        }

        tracing::info!("Tweet {} updated by {}", id, caller);
        Ok(())
    }

    /// Delete a tweet owned by `caller`
    pub async fn delete(&self, id: TweetId, caller: &Identity) -> Result<(), BackendError> {
        self.owned_tweet(id, caller).await?;

        if !self.store.delete_tweet(id).await? {
            return Err(BackendError::not_found(id));
        }

        tracing::info!("Tweet {} deleted by {}", id, caller);
        Ok(())
    }

    async fn owned_tweet(&self, id: TweetId, caller: &Identity) -> Result<Tweet, BackendError> {
        let tweet = self
            .store
            .find_tweet(id)
            .await?
            .ok_or_else(|| BackendError::not_found(id))?;

        match self.auth.authorize(caller, &tweet.author) {
            Access::Allow => Ok(tweet),
            Access::Deny => {
                tracing::warn!("{} may not modify tweet {} owned by {}", caller, id, tweet.author);
                Err(BackendError::forbidden(caller.as_str(), id))
            }
        }
    }
}
