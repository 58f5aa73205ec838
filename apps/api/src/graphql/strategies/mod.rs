//! Resolution strategies for `Query.books` and `Book.author`
//!
//! Each module turns store rows into [`Book`](super::types::Book) values
//! and decides how their `author` field will later be resolved.

pub mod conditional_join;
pub mod dataloader;
pub mod join;
pub mod naive;

/// Rows returned by `Query.books`
pub const BOOKS_LIMIT: i64 = 5;
