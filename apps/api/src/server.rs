//! HTTP server wiring
//!
//! Every variant binary calls [`run`] with its strategy; the startup
//! sequence and the routes are otherwise identical.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::Extension, response::IntoResponse, routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::{self, SeedOutcome};
use crate::graphql::{build_schema, prepare_request, BookshelfSchema, Strategy};
use crate::repositories::{LibraryRepository, SharedDataSource};
use crate::routes::health_router;

/// GraphQL handler that executes queries against the schema
///
/// Per-request context (the batched strategy's loader) is attached here so
/// that it lives exactly as long as the request.
async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    Extension(strategy): Extension<Strategy>,
    Extension(store): Extension<SharedDataSource>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = prepare_request(req.into_inner(), strategy, &store);
    schema.execute(request).await.into()
}

/// GraphQL Playground, served on `GET /`
async fn graphql_playground() -> impl IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/"),
    ))
}

/// Build the router for one strategy over an existing store
pub fn app(strategy: Strategy, pool: SqlitePool) -> Router {
    let store: SharedDataSource = Arc::new(LibraryRepository::new(pool.clone()));
    app_with_store(strategy, store, pool)
}

/// Like [`app`], but resolvers go through the given data source
pub fn app_with_store(strategy: Strategy, store: SharedDataSource, pool: SqlitePool) -> Router {
    let schema = build_schema(strategy, store.clone());

    Router::new()
        .route("/", get(graphql_playground).post(graphql_handler))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .merge(health_router(pool))
        .layer(Extension(schema))
        .layer(Extension(strategy))
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Development defaults to verbose app and request logs; other
/// environments fall back to the configured log level.
fn init_tracing(config: &Config) {
    let fallback = if config.environment().is_development() {
        "bookshelf_api=debug,tower_http=debug".to_string()
    } else {
        config.common.log_level.clone()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Start a server for `strategy` and run until the process is killed.
///
/// Any failure before the listener is bound, other than the store lacking
/// its tables, is returned and ends the process.
pub async fn run(strategy: Strategy) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config);

    tracing::info!(
        strategy = %strategy,
        environment = %config.environment(),
        "Starting Bookshelf GraphQL server"
    );

    tracing::info!("Connecting to {}", config.database().url);
    let pool = db::connect(config.database()).await?;

    match db::ensure_seeded(&pool).await? {
        SeedOutcome::Seeded { rows } => tracing::info!("Seeded {} authors and books", rows),
        SeedOutcome::AlreadyPresent => tracing::info!("Using existing store"),
    }

    let app = app(strategy, pool);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Server ready at http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
