//! Liveness report for load balancers and the admin dashboard.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the media store can take uploads.
    pub storage_ready: bool,
    /// Entries currently held by the public query cache.
    pub cached_queries: usize,
}

impl HealthResponse {
    fn new(db_healthy: bool, storage_ready: bool, cached_queries: usize) -> Self {
        Self {
            status: if db_healthy && storage_ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            storage_ready,
            cached_queries,
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (db, storage) = tokio::join!(
        luther_db::health_check(&state.pool),
        state.media.check_ready(),
    );

    if let Err(e) = &db {
        tracing::warn!(error = %e, "Health check: database unreachable");
    }
    if let Err(e) = &storage {
        tracing::warn!(error = %e, "Health check: media store not writable");
    }

    Json(HealthResponse::new(
        db.is_ok(),
        storage.is_ok(),
        state.cache.len().await,
    ))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
