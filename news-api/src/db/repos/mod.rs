//! Repository implementations for database access.
//!
//! Each operation is a single round trip: issue the query, translate an
//! empty result where a specific row was expected into a typed NotFound.
//! Driver-raised failures (constraint violations, malformed input) are not
//! inspected here; they carry through for the HTTP layer to classify.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::{Article, ArticleRepo, ArticleWithCount};
pub use comments::{Comment, CommentForArticle, CommentRepo};
pub use topics::{Topic, TopicRepo};
pub use users::{User, UserRepo, Username};

use thiserror::Error;

/// Resources a lookup can fail to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Article,
    Comment,
    Topic,
    User,
}

impl Resource {
    /// Exact user-facing message for a missing row of this kind.
    pub fn not_found_msg(self) -> &'static str {
        match self {
            Self::Article => "article not found",
            Self::Comment => "comment does not exist",
            Self::Topic => "topic not found",
            Self::User => "username not found",
        }
    }
}

/// Database error type.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{}", .resource.not_found_msg())]
    NotFound { resource: Resource },
}
