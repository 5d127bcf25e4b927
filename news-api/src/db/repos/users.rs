//! User repository.

use sqlx::{FromRow, PgPool};

use super::{DbError, Resource};

/// Full user record from database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Username-only row for the listing endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct Username {
    pub username: String,
}

/// User repository.
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List usernames. An empty list is a valid result.
    pub async fn list(&self) -> Result<Vec<Username>, DbError> {
        let users = sqlx::query_as("SELECT username FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Get a single user by username.
    pub async fn get(&self, username: &str) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: Resource::User,
        })?;

        Ok(user)
    }
}
