//! Eager join resolution
//!
//! `books` always left-joins `users` and reshapes every flat row into a book
//! with a nested author, whether or not the query asked for it.

use serde::Serialize;

use super::BOOKS_LIMIT;
use crate::graphql::types::{AuthorSource, Book};
use crate::models::{Book as DbBook, BookAuthorRow};
use crate::repositories::DataSource;

/// Author half of a hydrated row.
///
/// Taken from the joined `users` columns, so a dangling `authorId` yields an
/// author whose fields are both `None` rather than no author at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedAuthor {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// A flat join row reshaped into the nested response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HydratedBook {
    #[serde(flatten)]
    pub book: DbBook,
    pub author: HydratedAuthor,
}

/// Reshape flat `books`/`users` rows into books with a nested author
pub fn hydrate(rows: Vec<BookAuthorRow>) -> Vec<HydratedBook> {
    rows.into_iter()
        .map(|row| HydratedBook {
            book: DbBook {
                id: row.id,
                title: row.title,
                author_id: row.author_id,
            },
            author: HydratedAuthor {
                id: row.user_id,
                name: row.name,
            },
        })
        .collect()
}

pub(crate) fn into_books(hydrated: Vec<HydratedBook>) -> Vec<Book> {
    hydrated
        .into_iter()
        .map(|h| Book::new(h.book, AuthorSource::Hydrated(h.author)))
        .collect()
}

pub async fn books(store: &dyn DataSource) -> Result<Vec<Book>, sqlx::Error> {
    let rows = store.fetch_books_joined_with_authors(BOOKS_LIMIT).await?;
    tracing::debug!(rows = rows.len(), joined = true, "fetched books");

    Ok(into_books(hydrate(rows)))
}
