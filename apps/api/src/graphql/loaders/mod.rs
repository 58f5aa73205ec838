//! DataLoader implementations for GraphQL
//!
//! Loaders batch the single-key lookups issued by sibling field resolvers
//! into one store fetch. A fresh `DataLoader` is created per request, so
//! nothing loaded for one request is visible to another.

mod author;

pub use author::AuthorLoader;
