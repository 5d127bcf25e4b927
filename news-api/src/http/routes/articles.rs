//! Article endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::repos::{Article, ArticleRepo, ArticleWithCount};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{SortBy, SortOrder};

use super::common::{parse_id, vote_delta};

/// Listing query parameters, validated against the allow-lists before any
/// query text is assembled.
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

/// Article response for reads, with comment count
#[derive(Serialize)]
pub struct ArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i32,
    pub comment_count: i64,
}

impl From<ArticleWithCount> for ArticleResponse {
    fn from(a: ArticleWithCount) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            body: a.body,
            created_at: a.created_at.to_rfc3339(),
            votes: a.votes,
            comment_count: a.comment_count,
        }
    }
}

/// Vote-update response carries no comment count.
#[derive(Serialize)]
pub struct UpdatedArticleResponse {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i32,
}

impl From<Article> for UpdatedArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            article_id: a.article_id,
            title: a.title,
            topic: a.topic,
            author: a.author,
            body: a.body,
            created_at: a.created_at.to_rfc3339(),
            votes: a.votes,
        }
    }
}

/// Single-article envelope
#[derive(Serialize)]
pub struct ArticleEnvelope<T: Serialize> {
    pub article: T,
}

/// GET /api/articles - list articles with optional sort/order/topic
async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let sort_by = SortBy::parse(params.sort_by.as_deref())?;
    let order = SortOrder::parse(params.order.as_deref())?;

    let articles = ArticleRepo::new(&state.pool)
        .list(sort_by, order, params.topic.as_deref())
        .await?;

    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

/// GET /api/articles/{article_id} - single article with comment count
async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleEnvelope<ArticleResponse>>, ApiError> {
    let id = parse_id(&article_id)?;
    let article = ArticleRepo::new(&state.pool).get(id).await?;

    Ok(Json(ArticleEnvelope {
        article: ArticleResponse::from(article),
    }))
}

/// PATCH /api/articles/{article_id} - apply a relative vote update
async fn patch_article_votes(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ArticleEnvelope<UpdatedArticleResponse>>, ApiError> {
    let id = parse_id(&article_id)?;
    // A missing or unparseable body gets the same envelope as any other 4xx.
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let delta = vote_delta(&body)?;

    let article = ArticleRepo::new(&state.pool).update_votes(id, delta).await?;

    Ok(Json(ArticleEnvelope {
        article: UpdatedArticleResponse::from(article),
    }))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route(
            "/api/articles/{article_id}",
            get(get_article).patch(patch_article_votes),
        )
}
