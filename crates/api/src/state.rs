use std::sync::Arc;

use crate::cache::QueryCache;
use crate::config::ServerConfig;
use crate::storage::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: luther_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached public reads, invalidated by content mutations.
    pub cache: Arc<QueryCache>,
    /// Uploaded media backend.
    pub media: Arc<dyn MediaStore>,
}
