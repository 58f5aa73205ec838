//! Data access layer for the Bookshelf store
//!
//! Resolvers never touch the pool directly. They receive a
//! [`SharedDataSource`] through the GraphQL context, so tests can swap in
//! an in-memory store or wrap the real one to observe every fetch.

pub mod library;

pub use library::LibraryRepository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Author, Book, BookAuthorRow};

/// The four fetches the resolution strategies are built from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// First `limit` books, without author data
    async fn fetch_books(&self, limit: i64) -> Result<Vec<Book>, sqlx::Error>;

    /// A single author, or `None` if no row has this id
    async fn fetch_author_by_id(&self, id: i64) -> Result<Option<Author>, sqlx::Error>;

    /// Every author whose id is in `ids`, in no particular order
    async fn fetch_authors_by_ids(&self, ids: &[i64]) -> Result<Vec<Author>, sqlx::Error>;

    /// First `limit` books left-joined with their authors
    async fn fetch_books_joined_with_authors(
        &self,
        limit: i64,
    ) -> Result<Vec<BookAuthorRow>, sqlx::Error>;
}

/// Handle injected into every request context
pub type SharedDataSource = Arc<dyn DataSource>;
