//! Author DataLoader for batched fetching
//!
//! This loader batches multiple author ID lookups into a single
//! `WHERE id IN (...)` query, solving the N+1 problem when loading the
//! author of every book in a list.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Author;
use crate::repositories::SharedDataSource;

/// DataLoader for batching author queries
#[derive(Clone)]
pub struct AuthorLoader {
    store: SharedDataSource,
}

impl AuthorLoader {
    pub fn new(store: SharedDataSource) -> Self {
        Self { store }
    }
}

impl Loader<i64> for AuthorLoader {
    type Value = Author;
    type Error = Arc<sqlx::Error>;

    /// `keys` arrive already deduplicated. Ids with no row are simply absent
    /// from the map, which the caller sees as `None`; a failed fetch is
    /// handed to every request waiting on this batch.
    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        tracing::debug!(keys = keys.len(), "loading author batch");

        let authors = self
            .store
            .fetch_authors_by_ids(keys)
            .await
            .map_err(Arc::new)?;

        Ok(authors.into_iter().map(|a| (a.id, a)).collect())
    }
}
