//! Book GraphQL type
//!
//! The `author` relationship resolves differently depending on how the
//! book was loaded, which [`AuthorSource`] records.

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::strategies::join::HydratedAuthor;
use crate::graphql::strategies::{dataloader, naive};
use crate::models::{Author as DbAuthor, Book as DbBook};

use super::author::Author;
use super::Lenient;

/// Where `Book.author` gets its data
#[derive(Debug, Clone)]
pub enum AuthorSource {
    /// One store lookup per book
    PerRow,
    /// Author columns came back with the book row
    Hydrated(HydratedAuthor),
    /// Through the request's author DataLoader
    Batched,
}

/// Book information exposed via GraphQL
#[derive(Debug, Clone)]
pub struct Book {
    inner: DbBook,
    author: AuthorSource,
}

impl Book {
    pub fn new(book: DbBook, author: AuthorSource) -> Self {
        Self {
            inner: book,
            author,
        }
    }
}

#[Object]
impl Book {
    /// Unique book identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    /// Book title
    async fn title(&self) -> Option<&str> {
        self.inner.title.as_deref()
    }

    /// The book's author
    ///
    /// `null` when `authorId` matches no author. A failed lookup is reported
    /// on this field only.
    async fn author(&self, ctx: &Context<'_>) -> Lenient<Author> {
        let author_id = self.inner.author_id;
        match &self.author {
            AuthorSource::Hydrated(author) => Lenient::value(Author::from(author.clone())),
            AuthorSource::PerRow => looked_up(naive::author(ctx, author_id).await),
            AuthorSource::Batched => looked_up(dataloader::author(ctx, author_id).await),
        }
    }
}

fn looked_up(result: Result<Option<DbAuthor>>) -> Lenient<Author> {
    match result {
        Ok(author) => author.map(Author::from).into(),
        Err(err) => Lenient::failed(err),
    }
}
