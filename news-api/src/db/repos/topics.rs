//! Topic repository.

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Topic record from database.
#[derive(Debug, Clone, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// Topic repository.
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all topics. An empty list is a valid result.
    pub async fn list(&self) -> Result<Vec<Topic>, DbError> {
        let topics = sqlx::query_as("SELECT slug, description FROM topics")
            .fetch_all(self.pool)
            .await?;

        Ok(topics)
    }
}
