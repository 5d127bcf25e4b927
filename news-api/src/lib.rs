//! news-api: REST API over a relational dataset of articles, topics,
//! users, and comments.
//!
//! A thin CRUD layer: HTTP routes map onto parameterized SQL with
//! allow-list validation for the dynamic ORDER BY clause and centralized
//! error classification for everything that fails.

pub mod db;
pub mod http;
pub mod models;
pub mod tracing_setup;

pub use http::{run_server, ApiError, ServerConfig};
