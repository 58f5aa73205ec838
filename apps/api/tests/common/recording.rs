//! Data source wrapper that records fetches

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookshelf_api::models::{Author, Book, BookAuthorRow};
use bookshelf_api::repositories::{DataSource, LibraryRepository};
use sqlx::SqlitePool;

/// One call made against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Books(i64),
    AuthorById(i64),
    /// Keys sorted, since batch order is not meaningful
    AuthorsByIds(Vec<i64>),
    BooksJoined(i64),
}

/// Delegates to a [`LibraryRepository`] and remembers every call
pub struct RecordingDataSource {
    inner: LibraryRepository,
    fetches: Mutex<Vec<Fetch>>,
    fail_author_batches: AtomicBool,
}

impl RecordingDataSource {
    pub fn new(pool: SqlitePool) -> Arc<Self> {
        Arc::new(Self {
            inner: LibraryRepository::new(pool),
            fetches: Mutex::new(Vec::new()),
            fail_author_batches: AtomicBool::new(false),
        })
    }

    /// Make every `fetch_authors_by_ids` call fail from now on
    pub fn fail_author_batches(&self) {
        self.fail_author_batches.store(true, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> Vec<Fetch> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.fetches.lock().unwrap().clear();
    }

    fn record(&self, fetch: Fetch) {
        self.fetches.lock().unwrap().push(fetch);
    }
}

#[async_trait]
impl DataSource for RecordingDataSource {
    async fn fetch_books(&self, limit: i64) -> Result<Vec<Book>, sqlx::Error> {
        self.record(Fetch::Books(limit));
        self.inner.fetch_books(limit).await
    }

    async fn fetch_author_by_id(&self, id: i64) -> Result<Option<Author>, sqlx::Error> {
        self.record(Fetch::AuthorById(id));
        self.inner.fetch_author_by_id(id).await
    }

    async fn fetch_authors_by_ids(&self, ids: &[i64]) -> Result<Vec<Author>, sqlx::Error> {
        let mut sorted = ids.to_vec();
        sorted.sort_unstable();
        self.record(Fetch::AuthorsByIds(sorted));

        if self.fail_author_batches.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("author batch failed".to_string()));
        }
        self.inner.fetch_authors_by_ids(ids).await
    }

    async fn fetch_books_joined_with_authors(
        &self,
        limit: i64,
    ) -> Result<Vec<BookAuthorRow>, sqlx::Error> {
        self.record(Fetch::BooksJoined(limit));
        self.inner.fetch_books_joined_with_authors(limit).await
    }
}
