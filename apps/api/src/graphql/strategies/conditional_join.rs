//! Conditional join resolution
//!
//! Like the eager join, but `users` is joined only when the incoming
//! selection contains `books { author }`. Without it the plain book rows are
//! hydrated with an empty author that nothing will ever read.

use super::join::{hydrate, into_books};
use super::BOOKS_LIMIT;
use crate::graphql::selection::{does_path_exist, SelectionNode};
use crate::graphql::types::Book;
use crate::models::BookAuthorRow;
use crate::repositories::DataSource;

/// Selection path that makes the join worthwhile
pub const AUTHOR_PATH: [&str; 2] = ["books", "author"];

/// `selection` holds the `books` field as requested, rooted at the field
/// itself.
pub async fn books(
    store: &dyn DataSource,
    selection: &[SelectionNode],
) -> Result<Vec<Book>, sqlx::Error> {
    let should_join = does_path_exist(selection, &AUTHOR_PATH);

    let rows: Vec<BookAuthorRow> = if should_join {
        store.fetch_books_joined_with_authors(BOOKS_LIMIT).await?
    } else {
        store
            .fetch_books(BOOKS_LIMIT)
            .await?
            .into_iter()
            .map(BookAuthorRow::from)
            .collect()
    };
    tracing::debug!(rows = rows.len(), joined = should_join, "fetched books");

    Ok(into_books(hydrate(rows)))
}
