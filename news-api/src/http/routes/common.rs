//! Shared request-parsing helpers.

use serde_json::Value;

use crate::http::error::ApiError;

/// Parse a numeric path identifier.
///
/// Non-numeric text gets the same bad-request answer the driver would give
/// for an invalid integer representation.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest)
}

/// Extract `inc_votes` from a vote-update body.
pub fn vote_delta(body: &Value) -> Result<i32, ApiError> {
    body.get("inc_votes")
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ApiError::BadRequest)
}
