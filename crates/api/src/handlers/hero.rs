//! Admin handlers for the singleton hero settings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::content::ContentKind;
use luther_core::error::CoreError;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::hero::{CreateHeroSettings, HeroSettings, UpdateHeroSettings};
use luther_db::repositories::HeroRepo;

use super::{after_mutation, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, MutationResponse};
use crate::state::AppState;

const KIND: ContentKind = ContentKind::HeroSettings;

/// GET /api/v1/admin/hero
///
/// `data` is `null` until the row has been created.
pub async fn get(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<HeroSettings>>>> {
    let hero = HeroRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: hero }))
}

/// POST /api/v1/admin/hero
///
/// 409 when the row already exists; use PUT to change it.
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHeroSettings>,
) -> AppResult<(StatusCode, Json<MutationResponse<HeroSettings>>)> {
    if HeroRepo::get(&state.pool).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Hero settings already exist".into(),
        )));
    }
    let hero = HeroRepo::create(&state.pool, &input).await?;

    tracing::info!(hero_id = hero.id, user_id = user.user_id, "Hero settings created");
    let message = after_mutation(&state, KIND, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: hero,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/hero/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateHeroSettings>,
) -> AppResult<Json<MutationResponse<HeroSettings>>> {
    let hero = HeroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    tracing::info!(hero_id = id, user_id = user.user_id, "Hero settings updated");
    let message = after_mutation(&state, KIND, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: hero,
        message,
    }))
}
