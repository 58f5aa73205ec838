//! GraphQL schema and resolvers for Bookshelf
//!
//! One schema (`Author`, `Book`, `Query.books`) served by four
//! interchangeable resolution strategies:
//! - naive: one author query per book (the N+1 problem)
//! - eager join: always join `users` into the book query
//! - conditional join: join only when the selection asks for `author`
//! - batched: collect author ids per request and fetch them in one query

pub mod loaders;
pub mod query;
pub mod schema;
pub mod selection;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use schema::{build_schema, prepare_request, BookshelfSchema};
pub use strategy::Strategy;
