//! Book model and the flattened book/author join row

use serde::Serialize;
use sqlx::FromRow;

/// Book record from the books table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Auto-assigned book identifier
    pub id: i64,

    /// Book title
    pub title: Option<String>,

    /// References `users.id`; not checked on insert
    #[sqlx(rename = "authorId")]
    pub author_id: i64,
}

/// One row of `books LEFT JOIN users ON users.id = books.authorId`
///
/// The user columns are null when the foreign key dangles.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthorRow {
    pub id: i64,

    pub title: Option<String>,

    #[sqlx(rename = "authorId")]
    pub author_id: i64,

    /// `users.id` of the joined row
    #[sqlx(rename = "userId")]
    pub user_id: Option<i64>,

    /// `users.name` of the joined row
    pub name: Option<String>,
}

impl From<Book> for BookAuthorRow {
    /// A book row that was fetched without joining `users`
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
            user_id: None,
            name: None,
        }
    }
}
