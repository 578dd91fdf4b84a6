//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for public lists that the home page truncates.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

/// `?status=` filter for the admin message inbox. Absent or `all` lists
/// every message.
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}
