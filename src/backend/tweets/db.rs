/**
 * Database Operations for Tweets
 *
 * This module provides the queries over the `tweets` table and the
 * `TweetStore` trait that `TweetService` is built on.
 */

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::shared::TweetView;

/// Auto-assigned tweet ID
pub type TweetId = i64;

/// A row in the `tweets` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tweet {
    pub id: TweetId,
    pub content: String,
    /// Username of the owner
    pub author: String,
}

impl From<Tweet> for TweetView {
    fn from(tweet: Tweet) -> Self {
        TweetView {
            id: tweet.id,
            user: tweet.author,
            content: tweet.content,
        }
    }
}

/// Persistence operations over tweets
#[async_trait]
pub trait TweetStore: Send + Sync {
    /// Insert a tweet and return its new ID
    async fn insert_tweet(&self, author: &str, content: &str) -> Result<TweetId, sqlx::Error>;

    /// All tweets, newest first
    async fn list_tweets(&self) -> Result<Vec<Tweet>, sqlx::Error>;

    /// Look a tweet up by ID
    async fn find_tweet(&self, id: TweetId) -> Result<Option<Tweet>, sqlx::Error>;

    /// Replace a tweet's content; returns whether a row was updated
    async fn update_content(&self, id: TweetId, content: &str) -> Result<bool, sqlx::Error>;

    /// Delete a tweet; returns whether a row was removed
    async fn delete_tweet(&self, id: TweetId) -> Result<bool, sqlx::Error>;
}

/// Save a tweet to the database
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `author` - Username of the owner
/// * `content` - Already validated tweet text
///
/// # Returns
/// The new tweet's ID
pub async fn save_tweet(
    pool: &SqlitePool,
    author: &str,
    content: &str,
) -> Result<TweetId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO tweets (content, author)
        VALUES (?1, ?2)
        "#,
    )
    .bind(content)
    .bind(author)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load all tweets ordered newest first
pub async fn load_tweets(pool: &SqlitePool) -> Result<Vec<Tweet>, sqlx::Error> {
    sqlx::query_as::<_, Tweet>(
        r#"
        SELECT id, content, author
        FROM tweets
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get tweet by ID
pub async fn get_tweet_by_id(pool: &SqlitePool, id: TweetId) -> Result<Option<Tweet>, sqlx::Error> {
    sqlx::query_as::<_, Tweet>(
        r#"
        SELECT id, content, author
        FROM tweets
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a tweet's content, leaving id and author untouched
///
/// # Returns
/// Number of rows affected (0 if the tweet no longer exists)
pub async fn update_tweet_content(
    pool: &SqlitePool,
    id: TweetId,
    content: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tweets
        SET content = ?1
        WHERE id = ?2
        "#,
    )
    .bind(content)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a tweet
///
/// # Returns
/// Number of rows affected
pub async fn remove_tweet(pool: &SqlitePool, id: TweetId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tweets WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// `TweetStore` backed by the SQLite `tweets` table
#[derive(Debug, Clone)]
pub struct SqliteTweetStore {
    pool: SqlitePool,
}

impl SqliteTweetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetStore for SqliteTweetStore {
    async fn insert_tweet(&self, author: &str, content: &str) -> Result<TweetId, sqlx::Error> {
        save_tweet(&self.pool, author, content).await
    }

    async fn list_tweets(&self) -> Result<Vec<Tweet>, sqlx::Error> {
        load_tweets(&self.pool).await
    }

    async fn find_tweet(&self, id: TweetId) -> Result<Option<Tweet>, sqlx::Error> {
        get_tweet_by_id(&self.pool, id).await
    }

    async fn update_content(&self, id: TweetId, content: &str) -> Result<bool, sqlx::Error> {
        Ok(update_tweet_content(&self.pool, id, content).await? > 0)
    }

    async fn delete_tweet(&self, id: TweetId) -> Result<bool, sqlx::Error> {
        Ok(remove_tweet(&self.pool, id).await? > 0)
    }
}
