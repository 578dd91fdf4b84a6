//! Admin handlers for `/admin/testimonials`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::content::ContentKind;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use luther_db::repositories::TestimonialRepo;

use super::{after_mutation, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

const KIND: ContentKind = ContentKind::Testimonial;

/// GET /api/v1/admin/testimonials
pub async fn list(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// GET /api/v1/admin/testimonials/{id}
pub async fn get_by_id(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<MutationResponse<Testimonial>>)> {
    input.validate()?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(
        testimonial_id = testimonial.id,
        user_id = user.user_id,
        "Testimonial created"
    );
    let message = after_mutation(&state, KIND, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: testimonial,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTestimonial>,
) -> AppResult<Json<MutationResponse<Testimonial>>> {
    input.validate()?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    tracing::info!(testimonial_id = id, user_id = user.user_id, "Testimonial updated");
    let message = after_mutation(&state, KIND, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: testimonial,
        message,
    }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(not_found(KIND, id));
    }

    tracing::info!(testimonial_id = id, user_id = user.user_id, "Testimonial deleted");
    let message = after_mutation(&state, KIND, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}
