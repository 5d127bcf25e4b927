//! Article repository.
//!
//! Comment counts come from an article-anchored LEFT JOIN so articles with
//! zero comments are retained with a count of 0.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use super::{DbError, Resource};
use crate::models::{SortBy, SortOrder};

/// Article record from database.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Article with comment count for read display.
#[derive(Debug, Clone)]
pub struct ArticleWithCount {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

const ARTICLE_COLUMNS: &str =
    "a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes";

/// Article repository.
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List articles with comment counts, optionally filtered by topic.
    ///
    /// The ORDER BY clause is assembled only from the validated enum
    /// fragments; the topic filter is a bound parameter. A topic that
    /// exists but has no articles yields an empty list, not an error.
    pub async fn list(
        &self,
        sort_by: SortBy,
        order: SortOrder,
        topic: Option<&str>,
    ) -> Result<Vec<ArticleWithCount>, DbError> {
        if let Some(slug) = topic {
            let topic_exists: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
                    .bind(slug)
                    .fetch_one(self.pool)
                    .await?;
            if !topic_exists.0 {
                return Err(DbError::NotFound {
                    resource: Resource::Topic,
                });
            }
        }

        let mut query = format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM articles a \
             LEFT JOIN comments c ON c.article_id = a.article_id "
        );
        if topic.is_some() {
            query.push_str("WHERE a.topic = $1 ");
        }
        query.push_str(&format!(
            "GROUP BY {ARTICLE_COLUMNS} ORDER BY {} {}",
            sort_by.as_sql(),
            order.as_sql()
        ));

        let mut builder = sqlx::query(&query);
        if let Some(slug) = topic {
            builder = builder.bind(slug);
        }
        let rows = builder.fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(row_with_count).collect())
    }

    /// Get a single article by id, with its comment count.
    pub async fn get(&self, id: i32) -> Result<ArticleWithCount, DbError> {
        let row = sqlx::query(&format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM articles a \
             LEFT JOIN comments c ON c.article_id = a.article_id \
             WHERE a.article_id = $1 \
             GROUP BY {ARTICLE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: Resource::Article,
        })?;

        Ok(row_with_count(row))
    }

    /// Apply a relative vote update as a single atomic statement.
    ///
    /// The delta may be negative; no floor or ceiling is enforced.
    pub async fn update_votes(&self, id: i32, delta: i32) -> Result<Article, DbError> {
        let article: Article = sqlx::query_as(
            r#"
            UPDATE articles
            SET votes = votes + $2
            WHERE article_id = $1
            RETURNING article_id, title, topic, author, body, created_at, votes
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: Resource::Article,
        })?;

        Ok(article)
    }

    /// Existence probe used alongside the comment listing.
    pub async fn exists(&self, id: i32) -> Result<bool, DbError> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;
        Ok(row.0)
    }
}

fn row_with_count(row: sqlx::postgres::PgRow) -> ArticleWithCount {
    ArticleWithCount {
        article_id: row.get("article_id"),
        title: row.get("title"),
        topic: row.get("topic"),
        author: row.get("author"),
        body: row.get("body"),
        created_at: row.get("created_at"),
        votes: row.get("votes"),
        comment_count: row.get("comment_count"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL pointing at a seeded database:
    // cargo test -p news-api -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::pool::create_pool(&url)
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_defaults_to_created_at_descending() {
        let pool = test_pool().await;
        let articles = ArticleRepo::new(&pool)
            .list(SortBy::default(), SortOrder::default(), None)
            .await
            .expect("list failed");

        let timestamps: Vec<_> = articles.iter().map(|a| a.created_at).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_topic_is_not_found() {
        let pool = test_pool().await;
        let err = ArticleRepo::new(&pool)
            .list(SortBy::default(), SortOrder::default(), Some("not-a-topic"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::NotFound {
                resource: Resource::Topic
            }
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn vote_update_is_reversible() {
        let pool = test_pool().await;
        let repo = ArticleRepo::new(&pool);

        let before = repo.get(1).await.expect("article 1 exists").votes;
        let up = repo.update_votes(1, 10).await.expect("increment");
        assert_eq!(up.votes, before + 10);
        let down = repo.update_votes(1, -10).await.expect("decrement");
        assert_eq!(down.votes, before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn zero_comment_article_reports_count_of_zero() {
        let pool = test_pool().await;
        // Article 4 is seeded without comments.
        let article = ArticleRepo::new(&pool).get(4).await.expect("article 4 exists");
        assert_eq!(article.comment_count, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn topic_with_no_articles_yields_empty_list() {
        let pool = test_pool().await;
        // The "paper" topic is seeded with no articles.
        let articles = ArticleRepo::new(&pool)
            .list(SortBy::default(), SortOrder::default(), Some("paper"))
            .await
            .expect("existing topic is not an error");
        assert!(articles.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_article_is_not_found() {
        let pool = test_pool().await;
        let err = ArticleRepo::new(&pool).get(972_390_472).await.unwrap_err();

        assert!(matches!(
            err,
            DbError::NotFound {
                resource: Resource::Article
            }
        ));
    }
}
