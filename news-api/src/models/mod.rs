//! Domain validation types shared by the query builder and the handlers.

pub mod comment_payload;
pub mod sort;

pub use comment_payload::{CommentPayload, PayloadError};
pub use sort::{SortBy, SortError, SortOrder};
