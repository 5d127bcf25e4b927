//! User endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::{User, UserRepo, Username};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Username-only row for the listing endpoint
#[derive(Serialize)]
pub struct UsernameResponse {
    pub username: String,
}

impl From<Username> for UsernameResponse {
    fn from(u: Username) -> Self {
        Self {
            username: u.username,
        }
    }
}

/// Full user response
#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            name: u.name,
            avatar_url: u.avatar_url,
        }
    }
}

/// GET /api/users - list usernames
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UsernameResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;

    Ok(Json(users.into_iter().map(UsernameResponse::from).collect()))
}

/// GET /api/users/{username} - single user record
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(&username).await?;

    Ok(Json(UserResponse::from(user)))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{username}", get(get_user))
}
