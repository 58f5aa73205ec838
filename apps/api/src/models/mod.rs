//! Database models for the Bookshelf store
//!
//! Rows of the `users` and `books` tables, plus the flattened row produced
//! by joining the two.

pub mod author;
pub mod book;

pub use author::Author;
pub use book::{Book, BookAuthorRow};
