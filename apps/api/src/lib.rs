//! Bookshelf GraphQL API library
//!
//! A small books-and-authors GraphQL service with four ways of resolving
//! `Book.author`, each shipped as its own binary under `src/bin/`.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::Strategy;
