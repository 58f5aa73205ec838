//! HTTP route handlers besides the GraphQL endpoint

pub mod health;

pub use health::health_router;
