//! API error classification with IntoResponse.
//!
//! Failures are classified top to bottom, first match wins:
//! application-raised errors keep their status and message verbatim,
//! driver errors are classified by SQLSTATE, and anything left lands on
//! the terminal 500 catch-all. An application-raised 404 is never
//! downgraded to a 500, and a malformed-input driver error is never
//! mistaken for a referential-integrity one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sqlx::postgres::PgDatabaseError;

use crate::db::repos::{DbError, Resource};
use crate::models::{PayloadError, SortError};

/// SQLSTATE for invalid text representation (e.g. text where an integer
/// identifier was expected).
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// SQLSTATE for foreign-key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// API error type with automatic HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// A specific row was expected and absent (404).
    NotFound(Resource),

    /// Malformed identifier or vote delta (400).
    BadRequest,

    /// sort_by/order outside the allow-lists (400).
    InvalidQuery(SortError),

    /// Missing/invalid keys on comment creation (400).
    MalformedBody(PayloadError),

    /// Driver-raised failure, classified at response time.
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::NotFound(resource) => {
                (StatusCode::NOT_FOUND, resource.not_found_msg().to_owned())
            }
            Self::BadRequest => (StatusCode::BAD_REQUEST, "bad request".to_owned()),
            Self::InvalidQuery(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::MalformedBody(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Database(e) => classify_database(e),
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Classify a driver-raised failure.
///
/// Checks run in order: malformed input, then referential integrity, then
/// the mandatory catch-all. The catch-all logs the original error and
/// exposes only a generic message.
fn classify_database(err: sqlx::Error) -> (StatusCode, String) {
    if let Some(db_err) = err.as_database_error() {
        if let Some(code) = db_err.code() {
            if code == INVALID_TEXT_REPRESENTATION {
                return (StatusCode::BAD_REQUEST, "bad request".to_owned());
            }
            if code == FOREIGN_KEY_VIOLATION {
                // e.g. `Key (author)=(ghost) is not present in table "users".`
                let detail = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(PgDatabaseError::detail)
                    .unwrap_or("referenced row is not present")
                    .to_owned();
                return (StatusCode::NOT_FOUND, detail);
            }
        }
    }

    tracing::error!("unclassified database error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error".to_owned(),
    )
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource } => Self::NotFound(resource),
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}

impl From<SortError> for ApiError {
    fn from(e: SortError) -> Self {
        Self::InvalidQuery(e)
    }
}

impl From<PayloadError> for ApiError {
    fn from(e: PayloadError) -> Self {
        Self::MalformedBody(e)
    }
}
