//! Comment repository.
//!
//! Comment creation deliberately does not pre-check the referenced article
//! or user; a foreign-key violation from the driver carries the authoritative
//! detail and is classified at the HTTP layer.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{DbError, Resource};
use crate::models::CommentPayload;

/// Comment record from database.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment listing row; the per-article listing omits the article id.
#[derive(Debug, Clone, FromRow)]
pub struct CommentForArticle {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}

/// Comment repository.
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List comments for an article.
    ///
    /// Performs no existence check of its own; an empty Vec is a valid
    /// result. Callers pair this with `ArticleRepo::exists`.
    pub async fn list_for_article(&self, article_id: i32) -> Result<Vec<CommentForArticle>, DbError> {
        let comments = sqlx::query_as(
            r#"
            SELECT comment_id, votes, created_at, author, body
            FROM comments
            WHERE article_id = $1
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Insert a comment under an article, returning the created row with
    /// its generated id, timestamp, and zero vote count.
    pub async fn create(
        &self,
        article_id: i32,
        payload: &CommentPayload,
    ) -> Result<Comment, DbError> {
        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(&payload.username)
        .bind(&payload.body)
        .fetch_one(self.pool)
        .await?;

        Ok(comment)
    }

    /// Apply a relative vote update as a single atomic statement.
    pub async fn update_votes(&self, id: i32, delta: i32) -> Result<Comment, DbError> {
        let comment: Comment = sqlx::query_as(
            r#"
            UPDATE comments
            SET votes = votes + $2
            WHERE comment_id = $1
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: Resource::Comment,
        })?;

        Ok(comment)
    }

    /// Delete a comment by id. Deleting an already-absent id is NotFound.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1 RETURNING comment_id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: Resource::Comment,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::pool::create_pool(&url)
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_of_missing_comment_is_not_found() {
        let pool = test_pool().await;
        let err = CommentRepo::new(&pool).delete(2_363_457).await.unwrap_err();

        assert!(matches!(
            err,
            DbError::NotFound {
                resource: Resource::Comment
            }
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_with_unregistered_user_violates_foreign_key() {
        let pool = test_pool().await;
        let payload = CommentPayload {
            username: "not-registered".to_owned(),
            body: "Some words.".to_owned(),
        };
        let err = CommentRepo::new(&pool).create(4, &payload).await.unwrap_err();

        // The violation must surface as a driver error, not a NotFound.
        match err {
            DbError::Sqlx(e) => {
                let code = e
                    .as_database_error()
                    .and_then(|d| d.code())
                    .expect("database error with code");
                assert_eq!(code, "23503");
            }
            other => panic!("expected driver error, got {other:?}"),
        }
    }
}
