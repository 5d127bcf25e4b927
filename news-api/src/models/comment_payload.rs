//! Comment submission validation.
//!
//! The POST body is inspected as a raw JSON object so key names can be
//! checked before any values are read.

use serde_json::{Map, Value};
use thiserror::Error;

/// Rejection for a malformed comment submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Fewer than the two required keys were supplied.
    #[error("missing fields in request")]
    MissingFields,

    /// Enough keys were supplied but `username` or `body` is absent.
    #[error("invalid key")]
    InvalidKey,

    /// A required key is present but its value is not a string.
    #[error("bad request")]
    InvalidValue,
}

/// Validated comment submission.
#[derive(Debug, Clone)]
pub struct CommentPayload {
    pub username: String,
    pub body: String,
}

impl CommentPayload {
    /// Validate a raw JSON object.
    ///
    /// Extra keys are tolerated and ignored as long as both required keys
    /// are present.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, PayloadError> {
        if object.len() < 2 {
            return Err(PayloadError::MissingFields);
        }
        if !object.contains_key("username") || !object.contains_key("body") {
            return Err(PayloadError::InvalidKey);
        }

        let username = object
            .get("username")
            .and_then(Value::as_str)
            .ok_or(PayloadError::InvalidValue)?;
        let body = object
            .get("body")
            .and_then(Value::as_str)
            .ok_or(PayloadError::InvalidValue)?;

        Ok(Self {
            username: username.to_owned(),
            body: body.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().expect("test value is an object").clone()
    }

    #[test]
    fn accepts_well_formed_payload() {
        let payload = CommentPayload::from_json(&object(json!({
            "username": "icellusedkars",
            "body": "Some words."
        })))
        .unwrap();
        assert_eq!(payload.username, "icellusedkars");
        assert_eq!(payload.body, "Some words.");
    }

    #[test]
    fn tolerates_extra_keys() {
        let payload = CommentPayload::from_json(&object(json!({
            "username": "icellusedkars",
            "body": "Some words.",
            "magic": false
        })))
        .unwrap();
        assert_eq!(payload.username, "icellusedkars");
    }

    #[test]
    fn rejects_too_few_keys() {
        let err = CommentPayload::from_json(&object(json!({
            "username": "icellusedkars"
        })))
        .unwrap_err();
        assert_eq!(err, PayloadError::MissingFields);
    }

    #[test]
    fn rejects_wrong_username_key() {
        let err = CommentPayload::from_json(&object(json!({
            "banana": "icellusedkars",
            "body": "Some words."
        })))
        .unwrap_err();
        assert_eq!(err, PayloadError::InvalidKey);
    }

    #[test]
    fn rejects_wrong_body_key() {
        let err = CommentPayload::from_json(&object(json!({
            "user": "icellusedkars",
            "flyingbird": "Some words."
        })))
        .unwrap_err();
        assert_eq!(err, PayloadError::InvalidKey);
    }

    #[test]
    fn rejects_non_string_value() {
        let err = CommentPayload::from_json(&object(json!({
            "username": 42,
            "body": "Some words."
        })))
        .unwrap_err();
        assert_eq!(err, PayloadError::InvalidValue);
        assert_eq!(err.to_string(), "bad request");
    }
}
