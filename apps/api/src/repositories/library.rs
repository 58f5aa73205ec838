//! SQLite-backed data source

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::DataSource;
use crate::models::{Author, Book, BookAuthorRow};

/// Repository over the `users` and `books` tables
#[derive(Clone)]
pub struct LibraryRepository {
    pool: SqlitePool,
}

impl LibraryRepository {
    /// Create a new LibraryRepository instance
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataSource for LibraryRepository {
    async fn fetch_books(&self, limit: i64) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>("SELECT id, title, authorId FROM books ORDER BY id LIMIT ?")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    async fn fetch_author_by_id(&self, id: i64) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query_as::<_, Author>("SELECT id, name FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn fetch_authors_by_ids(&self, ids: &[i64]) -> Result<Vec<Author>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new("SELECT id, name FROM users WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        query
            .build_query_as::<Author>()
            .fetch_all(&self.pool)
            .await
    }

    async fn fetch_books_joined_with_authors(
        &self,
        limit: i64,
    ) -> Result<Vec<BookAuthorRow>, sqlx::Error> {
        sqlx::query_as::<_, BookAuthorRow>(
            r#"SELECT books.id AS id, books.title AS title, books.authorId AS authorId,
                users.id AS userId, users.name AS name
            FROM books
            LEFT JOIN users ON users.id = books.authorId
            ORDER BY books.id
            LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
