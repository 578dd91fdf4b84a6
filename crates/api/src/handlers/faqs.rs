//! Admin handlers for `/admin/faqs`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::content::ContentKind;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use luther_db::repositories::FaqRepo;

use super::{after_mutation, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

const KIND: ContentKind = ContentKind::Faq;

/// GET /api/v1/admin/faqs
pub async fn list(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Faq>>>> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// GET /api/v1/admin/faqs/{id}
pub async fn get_by_id(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Faq>>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(Json(DataResponse { data: faq }))
}

/// POST /api/v1/admin/faqs
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFaq>,
) -> AppResult<(StatusCode, Json<MutationResponse<Faq>>)> {
    input.validate()?;
    let faq = FaqRepo::create(&state.pool, &input).await?;

    tracing::info!(faq_id = faq.id, user_id = user.user_id, "FAQ created");
    let message = after_mutation(&state, KIND, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse { data: faq, message }),
    ))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateFaq>,
) -> AppResult<Json<MutationResponse<Faq>>> {
    input.validate()?;
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ updated");
    let message = after_mutation(&state, KIND, Mutation::Updated).await;
    Ok(Json(MutationResponse { data: faq, message }))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(not_found(KIND, id));
    }

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ deleted");
    let message = after_mutation(&state, KIND, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}
