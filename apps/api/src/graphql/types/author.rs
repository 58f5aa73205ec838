//! Author GraphQL type

use async_graphql::{Object, ID};

use super::Lenient;
use crate::graphql::strategies::join::HydratedAuthor;
use crate::models::Author as DbAuthor;

/// Author information exposed via GraphQL
///
/// Both fields are optional internally because a hydrated join row carries
/// nulls when `authorId` dangles. They resolve to `null` in that case even
/// though the schema declares them non-null.
#[derive(Debug, Clone)]
pub struct Author {
    id: Option<i64>,
    name: Option<String>,
}

impl From<DbAuthor> for Author {
    fn from(author: DbAuthor) -> Self {
        Self {
            id: Some(author.id),
            name: Some(author.name),
        }
    }
}

impl From<HydratedAuthor> for Author {
    fn from(author: HydratedAuthor) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

#[Object]
impl Author {
    /// Unique author identifier
    async fn id(&self) -> Lenient<ID> {
        self.id.map(|id| ID(id.to_string())).into()
    }

    /// Author name
    async fn name(&self) -> Lenient<String> {
        self.name.clone().into()
    }
}
