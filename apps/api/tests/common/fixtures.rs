//! Store fixtures for integration tests

#![allow(dead_code)]

use bookshelf_api::db;
use bookshelf_shared_config::DatabaseConfig;
use sqlx::SqlitePool;

/// The query every strategy is compared on
pub const FULL_QUERY: &str = "{ books { id title author { id name } } }";

/// Empty in-memory store with both tables created
pub async fn empty_store() -> SqlitePool {
    let pool = db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory store should open");
    let mut conn = pool.acquire().await.expect("connection");
    db::create_tables(&mut conn).await.expect("tables");
    drop(conn);
    pool
}

/// In-memory store seeded the same way a first run seeds the file store
pub async fn seeded_store() -> SqlitePool {
    let pool = db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory store should open");
    db::ensure_seeded(&pool).await.expect("seed");
    pool
}

/// Store with the given authors (ids assigned 1, 2, ...) and books.
///
/// Book author ids are inserted verbatim, so they may dangle.
pub async fn store_with(authors: &[&str], books: &[(&str, i64)]) -> SqlitePool {
    let pool = empty_store().await;
    let mut conn = pool.acquire().await.expect("connection");

    for name in authors {
        db::insert_author(&mut conn, name).await.expect("author");
    }
    for (title, author_id) in books {
        db::insert_book(&mut conn, Some(title), *author_id)
            .await
            .expect("book");
    }

    drop(conn);
    pool
}

/// Three authors and five books whose author ids are `[1, 1, 2, 3, 3]`
pub async fn shared_authors_store() -> SqlitePool {
    store_with(
        &["Ursula", "Octavia", "Iain"],
        &[
            ("The Dispossessed", 1),
            ("The Lathe of Heaven", 1),
            ("Kindred", 2),
            ("Excession", 3),
            ("Use of Weapons", 3),
        ],
    )
    .await
}

/// Five books where the third references an author that does not exist
pub async fn dangling_author_store() -> SqlitePool {
    store_with(
        &["Ursula", "Octavia"],
        &[
            ("The Dispossessed", 1),
            ("Kindred", 2),
            ("Lost Manuscript", 99),
            ("Parable of the Sower", 2),
            ("Always Coming Home", 1),
        ],
    )
    .await
}
