//! GraphQL object types
//!
//! ```graphql
//! type Author { id: ID!  name: String! }
//! type Book   { id: ID!  title: String  author: Author! }
//! ```

pub mod author;
pub mod book;
mod lenient;

pub use author::Author;
pub use book::{AuthorSource, Book};
pub use lenient::Lenient;
