//! Admin handlers for `/admin/projects`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::content::ContentKind;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::project::{CreateProject, Project, UpdateProject};
use luther_db::repositories::ProjectRepo;

use super::{after_mutation, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

const KIND: ContentKind = ContentKind::Project;

/// GET /api/v1/admin/projects
pub async fn list(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<MutationResponse<Project>>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, user_id = user.user_id, "Project created");
    let message = after_mutation(&state, KIND, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: project,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<MutationResponse<Project>>> {
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    tracing::info!(project_id = id, user_id = user.user_id, "Project updated");
    let message = after_mutation(&state, KIND, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: project,
        message,
    }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(KIND, id));
    }

    tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");
    let message = after_mutation(&state, KIND, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}
