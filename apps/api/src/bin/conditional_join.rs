use bookshelf_api::graphql::Strategy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bookshelf_api::server::run(Strategy::ConditionalJoin).await
}
