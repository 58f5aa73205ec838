//! Naive per-row resolution
//!
//! `books` is one query; every `author` is another. Five books with their
//! authors cost six queries.

use async_graphql::{Context, Result};

use super::BOOKS_LIMIT;
use crate::graphql::types::{AuthorSource, Book};
use crate::models::Author;
use crate::repositories::{DataSource, SharedDataSource};

pub async fn books(store: &dyn DataSource) -> Result<Vec<Book>, sqlx::Error> {
    let books = store.fetch_books(BOOKS_LIMIT).await?;
    tracing::debug!(rows = books.len(), "fetched books, authors resolved per row");

    Ok(books
        .into_iter()
        .map(|book| Book::new(book, AuthorSource::PerRow))
        .collect())
}

/// Look up a single author; `None` when the id matches no row
pub async fn author(ctx: &Context<'_>, author_id: i64) -> Result<Option<Author>> {
    let store = ctx.data::<SharedDataSource>()?;
    Ok(store.fetch_author_by_id(author_id).await?)
}
