//! Route handlers organized by resource.

pub mod api;
pub mod articles;
pub mod comments;
pub mod common;
pub mod health;
pub mod topics;
pub mod users;
