/**
 * User Model and Database Operations
 *
 * This module holds the `users` table row types, the free query functions
 * over a `SqlitePool`, and the `UserStore` trait the credential store is
 * built on.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Auto-assigned user ID
pub type UserId = i64;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Username (unique, non-empty)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// Public view of a user (no password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
}

/// Persistence operations over user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and return its new ID
    ///
    /// Fails with a unique-violation database error if the username exists.
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<UserId, sqlx::Error>;

    /// Look a user up by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    /// All users, ascending by ID
    async fn list_users(&self) -> Result<Vec<UserSummary>, sqlx::Error>;
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// The new user's ID
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<UserId, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES (?1, ?2)
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users ordered by ID
pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, username
        FROM users
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// `UserStore` backed by the SQLite `users` table
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<UserId, sqlx::Error> {
        create_user(&self.pool, username, password_hash).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        get_user_by_username(&self.pool, username).await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, sqlx::Error> {
        get_all_users(&self.pool).await
    }
}
