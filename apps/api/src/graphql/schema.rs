//! GraphQL schema builder for Bookshelf
//!
//! The schema carries the strategy and the shared data source; per-request
//! state (the author DataLoader) is attached by [`prepare_request`].

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, Request, Schema};

use super::loaders::AuthorLoader;
use super::query::Query;
use super::strategy::Strategy;
use crate::repositories::SharedDataSource;

/// The Bookshelf GraphQL schema type
pub type BookshelfSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create the schema served by one strategy variant
pub fn build_schema(strategy: Strategy, store: SharedDataSource) -> BookshelfSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(strategy)
        .data(store)
        .finish()
}

/// Attach per-request context.
///
/// The batched strategy gets a brand new author loader for every request,
/// so keys and results never carry over between requests.
pub fn prepare_request(request: Request, strategy: Strategy, store: &SharedDataSource) -> Request {
    match strategy {
        Strategy::Batched => request.data(DataLoader::new(
            AuthorLoader::new(store.clone()),
            tokio::spawn,
        )),
        Strategy::Naive | Strategy::EagerJoin | Strategy::ConditionalJoin => request,
    }
}
