//! Batched loader resolution
//!
//! `books` is fetched plainly. Each `author` asks the request's
//! `DataLoader<AuthorLoader>`, which gathers the ids requested by sibling
//! books before issuing a single `WHERE id IN (...)` query, so a request
//! costs at most two queries.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Result};

use super::BOOKS_LIMIT;
use crate::graphql::loaders::AuthorLoader;
use crate::graphql::types::{AuthorSource, Book};
use crate::models::Author;
use crate::repositories::DataSource;

pub async fn books(store: &dyn DataSource) -> Result<Vec<Book>, sqlx::Error> {
    let books = store.fetch_books(BOOKS_LIMIT).await?;
    tracing::debug!(rows = books.len(), "fetched books, authors deferred to loader");

    Ok(books
        .into_iter()
        .map(|book| Book::new(book, AuthorSource::Batched))
        .collect())
}

pub async fn author(ctx: &Context<'_>, author_id: i64) -> Result<Option<Author>> {
    let loader = ctx.data::<DataLoader<AuthorLoader>>()?;
    Ok(loader.load_one(author_id).await?)
}
