//! Common test utilities for API integration tests
//!
//! Store fixtures, a data source wrapper that records every fetch, and
//! helpers for executing GraphQL queries against a strategy.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;
pub mod recording;

pub use fixtures::*;
pub use helpers::*;
pub use recording::*;
