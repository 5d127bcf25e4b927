//! Comment endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::db::repos::{ArticleRepo, Comment, CommentForArticle, CommentRepo, Resource};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::CommentPayload;

use super::common::{parse_id, vote_delta};

/// Full comment response
#[derive(Serialize)]
pub struct CommentResponse {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            article_id: c.article_id,
            author: c.author,
            body: c.body,
            votes: c.votes,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Listing rows omit the article id, matching the listing query's columns.
#[derive(Serialize)]
pub struct CommentListResponse {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: String,
    pub author: String,
    pub body: String,
}

impl From<CommentForArticle> for CommentListResponse {
    fn from(c: CommentForArticle) -> Self {
        Self {
            comment_id: c.comment_id,
            votes: c.votes,
            created_at: c.created_at.to_rfc3339(),
            author: c.author,
            body: c.body,
        }
    }
}

/// Single-comment envelope for creation
#[derive(Serialize)]
pub struct CommentEnvelope {
    pub comment: CommentResponse,
}

/// GET /api/articles/{article_id}/comments - comments for an article
///
/// The comment fetch and the article existence probe are issued
/// concurrently; the existence outcome is consulted first and decides
/// whether the comments or an article-not-found failure surface.
async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<Vec<CommentListResponse>>, ApiError> {
    let id = parse_id(&article_id)?;

    let comment_repo = CommentRepo::new(&state.pool);
    let article_repo = ArticleRepo::new(&state.pool);
    let (comments, article_exists) = tokio::join!(
        comment_repo.list_for_article(id),
        article_repo.exists(id),
    );

    if !article_exists? {
        return Err(ApiError::NotFound(Resource::Article));
    }

    Ok(Json(
        comments?.into_iter().map(CommentListResponse::from).collect(),
    ))
}

/// POST /api/articles/{article_id}/comments - create a comment
///
/// Foreign-key violations (unknown article or user) are not pre-checked;
/// the driver's constraint detail is surfaced by the error classifier.
async fn post_comment(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentEnvelope>), ApiError> {
    let id = parse_id(&article_id)?;
    // An absent or unparseable body is treated as an empty submission and
    // fails the key checks like one.
    let body = body
        .map(|Json(v)| v)
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
    let object = body.as_object().ok_or(ApiError::BadRequest)?;
    let payload = CommentPayload::from_json(object)?;

    let comment = CommentRepo::new(&state.pool).create(id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentEnvelope {
            comment: CommentResponse::from(comment),
        }),
    ))
}

/// PATCH /api/comments/{comment_id} - apply a relative vote update
async fn patch_comment_votes(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CommentResponse>, ApiError> {
    let id = parse_id(&comment_id)?;
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let delta = vote_delta(&body)?;

    let comment = CommentRepo::new(&state.pool).update_votes(id, delta).await?;

    Ok(Json(CommentResponse::from(comment)))
}

/// DELETE /api/comments/{comment_id} - delete a comment
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&comment_id)?;
    CommentRepo::new(&state.pool).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/articles/{article_id}/comments",
            get(list_comments).post(post_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(patch_comment_votes).delete(delete_comment),
        )
}
