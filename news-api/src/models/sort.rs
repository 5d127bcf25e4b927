//! Sort allow-lists for the article listing query.
//!
//! ORDER BY cannot go through the driver's placeholder mechanism, so
//! requested fields and directions are validated against closed enums and
//! only the fixed fragments below ever reach the query text.

use thiserror::Error;

/// Rejection for sort parameters outside the allow-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid sort query")]
    InvalidSortField,

    #[error("invalid order query")]
    InvalidOrder,
}

/// Sortable article fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    ArticleId,
    Title,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
}

impl SortBy {
    /// Parse a `sort_by` query parameter. `None` selects the default.
    pub fn parse(param: Option<&str>) -> Result<Self, SortError> {
        match param {
            None => Ok(Self::default()),
            Some("article_id") => Ok(Self::ArticleId),
            Some("title") => Ok(Self::Title),
            Some("author") => Ok(Self::Author),
            Some("body") => Ok(Self::Body),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("votes") => Ok(Self::Votes),
            Some(_) => Err(SortError::InvalidSortField),
        }
    }

    /// Fixed ORDER BY column fragment, qualified to the articles alias.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ArticleId => "a.article_id",
            Self::Title => "a.title",
            Self::Author => "a.author",
            Self::Body => "a.body",
            Self::CreatedAt => "a.created_at",
            Self::Votes => "a.votes",
        }
    }
}

/// Sort directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an `order` query parameter. `None` selects the default.
    pub fn parse(param: Option<&str>) -> Result<Self, SortError> {
        match param {
            None => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(SortError::InvalidOrder),
        }
    }

    /// Fixed ORDER BY direction fragment.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
