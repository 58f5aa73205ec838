//! Store bootstrap: connection, schema creation and first-run seeding

use std::str::FromStr;
use std::time::Duration;

use bookshelf_shared_config::DatabaseConfig;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::ApiResult;

/// Number of (author, book) pairs inserted into a fresh store
pub const SEED_ROWS: usize = 100;

/// What [`ensure_seeded`] found or did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Tables were missing and have been created and filled
    Seeded { rows: usize },
    /// `users` already existed; nothing was touched
    AlreadyPresent,
}

/// Open a pool on the configured store, creating the file if needed.
///
/// Foreign keys are declared in the schema but not enforced on insert.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await
}

/// Create the `users` and `books` tables
pub async fn create_tables(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, name VARCHAR(255))",
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"CREATE TABLE books (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            title VARCHAR(255),
            authorId INTEGER,
            FOREIGN KEY (authorId) REFERENCES users (id)
        )"#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Insert an author and return its assigned id
pub async fn insert_author(conn: &mut SqliteConnection, name: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(name)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a book and return its assigned id
pub async fn insert_book(
    conn: &mut SqliteConnection,
    title: Option<&str>,
    author_id: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO books (title, authorId) VALUES (?, ?)")
        .bind(title)
        .bind(author_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Create and fill the store on first run.
///
/// A probe on `users` decides: a "no such table" failure triggers schema
/// creation plus [`SEED_ROWS`] author/book pairs in one transaction, any
/// other failure is returned to the caller. Startup runs this before the
/// listener is bound, so concurrent callers are not expected.
pub async fn ensure_seeded(pool: &SqlitePool) -> ApiResult<SeedOutcome> {
    match sqlx::query("SELECT id, name FROM users LIMIT 1")
        .fetch_optional(pool)
        .await
    {
        Ok(_) => {
            tracing::debug!("users table present, skipping seed");
            Ok(SeedOutcome::AlreadyPresent)
        }
        Err(sqlx::Error::Database(err)) if err.message().contains("no such table") => {
            tracing::info!("Store is empty, creating tables and seeding {} rows", SEED_ROWS);

            let mut tx = pool.begin().await?;
            create_tables(&mut tx).await?;
            for _ in 0..SEED_ROWS {
                let name: String = Name().fake();
                let title: String = CompanyName().fake();
                let author_id = insert_author(&mut tx, &name).await?;
                insert_book(&mut tx, Some(&title), author_id).await?;
            }
            tx.commit().await?;

            Ok(SeedOutcome::Seeded { rows: SEED_ROWS })
        }
        Err(err) => Err(err.into()),
    }
}

/// Cheap liveness query against the store
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
