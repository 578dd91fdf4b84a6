//! Admin dashboard counts.

use axum::extract::State;
use axum::Json;
use luther_db::models::overview::ContentCounts;
use luther_db::repositories::OverviewRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/overview
pub async fn get(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ContentCounts>>> {
    let counts = OverviewRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
