//! Root query for Bookshelf

use async_graphql::{Context, Object, Result};

use crate::graphql::selection::SelectionNode;
use crate::graphql::strategies::{conditional_join, dataloader, join, naive};
use crate::graphql::strategy::Strategy;
use crate::graphql::types::Book;
use crate::repositories::SharedDataSource;

/// Root query type
#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// The first five books in the store
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let strategy = ctx.data::<Strategy>()?;
        let store = ctx.data::<SharedDataSource>()?.as_ref();

        let books = match strategy {
            Strategy::Naive => naive::books(store).await?,
            Strategy::EagerJoin => join::books(store).await?,
            Strategy::ConditionalJoin => {
                let selection = [SelectionNode::from(&ctx.item.node)];
                conditional_join::books(store, &selection).await?
            }
            Strategy::Batched => dataloader::books(store).await?,
        };

        Ok(Some(books.into_iter().map(Some).collect()))
    }
}
