//! Health check HTTP route
//!
//! `GET /.well-known/apollo/server-health` is the path GraphQL tooling
//! probes by convention. It answers `{"status":"pass"}` once the store
//! responds to a ping.

use axum::{extract::State, routing::get, Json, Router};
use sqlx::SqlitePool;

use crate::db;
use crate::error::{ApiError, ApiResult};

/// Path of the health endpoint
pub const HEALTH_PATH: &str = "/.well-known/apollo/server-health";

/// Create health check router
pub fn health_router(pool: SqlitePool) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(server_health))
        .with_state(pool)
}

async fn server_health(State(pool): State<SqlitePool>) -> ApiResult<Json<serde_json::Value>> {
    db::ping(&pool).await.map_err(|e| {
        tracing::warn!(error = %e, "store ping failed");
        ApiError::DatabaseUnavailable
    })?;

    Ok(Json(serde_json::json!({ "status": "pass" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use bookshelf_shared_config::DatabaseConfig;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_passes_with_live_store() {
        let pool = db::connect(&DatabaseConfig::in_memory()).await.unwrap();

        let response = health_router(pool)
            .oneshot(Request::builder().uri(HEALTH_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "pass");
    }

    #[tokio::test]
    async fn test_health_fails_with_closed_store() {
        let pool = db::connect(&DatabaseConfig::in_memory()).await.unwrap();
        pool.close().await;

        let response = health_router(pool)
            .oneshot(Request::builder().uri(HEALTH_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
