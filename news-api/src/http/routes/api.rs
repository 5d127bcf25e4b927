//! Endpoint description document.

use axum::{routing::get, Json, Router};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static ENDPOINT_DESCRIPTIONS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../endpoints.json"))
        .expect("endpoints.json is valid JSON")
});

/// GET /api - describe every available endpoint
async fn describe_api() -> Json<Value> {
    Json(json!({ "descriptions": &*ENDPOINT_DESCRIPTIONS }))
}

/// Description routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api", get(describe_api))
}
