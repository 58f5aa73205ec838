//! Helpers for running GraphQL requests in tests

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::Request;
use bookshelf_api::graphql::{build_schema, prepare_request, Strategy};
use bookshelf_api::repositories::{DataSource, SharedDataSource};

/// Result of one GraphQL execution, flattened to JSON
#[derive(Debug)]
pub struct Outcome {
    pub data: serde_json::Value,
    pub errors: Vec<String>,
}

impl Outcome {
    /// `data.books` as an array
    pub fn books(&self) -> &Vec<serde_json::Value> {
        self.data["books"]
            .as_array()
            .expect("books should be a list")
    }
}

/// Execute `query` the way the HTTP handler would: a fresh request context
/// on a schema built for `strategy`.
pub async fn execute<S>(strategy: Strategy, store: Arc<S>, query: &str) -> Outcome
where
    S: DataSource + 'static,
{
    let store: SharedDataSource = store;
    let schema = build_schema(strategy, store.clone());
    let response = schema
        .execute(prepare_request(Request::new(query), strategy, &store))
        .await;

    Outcome {
        data: response.data.into_json().expect("data should be valid JSON"),
        errors: response.errors.iter().map(|e| e.message.clone()).collect(),
    }
}

/// `(id, title, author.id, author.name)` for every returned book
pub fn tuples(outcome: &Outcome) -> Vec<(String, String, String, String)> {
    outcome
        .books()
        .iter()
        .map(|book| {
            (
                book["id"].as_str().unwrap_or_default().to_string(),
                book["title"].as_str().unwrap_or_default().to_string(),
                book["author"]["id"].as_str().unwrap_or_default().to_string(),
                book["author"]["name"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}
