//! Admin handlers for `/admin/how-we-work/{steps,stats,services}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::content::ContentKind;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::how_we_work::{
    CreateHowWeWorkStat, CreateHowWeWorkStep, CreateServiceMarquee, HowWeWorkStat,
    HowWeWorkStep, ServiceMarquee, UpdateHowWeWorkStat, UpdateHowWeWorkStep,
    UpdateServiceMarquee,
};
use luther_db::repositories::{HowWeWorkStatRepo, HowWeWorkStepRepo, ServiceMarqueeRepo};

use super::{after_mutation, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Process steps
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/how-we-work/steps
pub async fn list_steps(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HowWeWorkStep>>>> {
    let steps = HowWeWorkStepRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: steps }))
}

/// GET /api/v1/admin/how-we-work/steps/{id}
pub async fn get_step(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<HowWeWorkStep>>> {
    let step = HowWeWorkStepRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ContentKind::HowWeWorkStep, id))?;
    Ok(Json(DataResponse { data: step }))
}

/// POST /api/v1/admin/how-we-work/steps
pub async fn create_step(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHowWeWorkStep>,
) -> AppResult<(StatusCode, Json<MutationResponse<HowWeWorkStep>>)> {
    input.validate()?;
    let step = HowWeWorkStepRepo::create(&state.pool, &input).await?;

    tracing::info!(step_id = step.id, user_id = user.user_id, "Process step created");
    let message = after_mutation(&state, ContentKind::HowWeWorkStep, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: step,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/how-we-work/steps/{id}
pub async fn update_step(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateHowWeWorkStep>,
) -> AppResult<Json<MutationResponse<HowWeWorkStep>>> {
    input.validate()?;
    let step = HowWeWorkStepRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ContentKind::HowWeWorkStep, id))?;

    tracing::info!(step_id = id, user_id = user.user_id, "Process step updated");
    let message = after_mutation(&state, ContentKind::HowWeWorkStep, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: step,
        message,
    }))
}

/// DELETE /api/v1/admin/how-we-work/steps/{id}
pub async fn delete_step(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !HowWeWorkStepRepo::delete(&state.pool, id).await? {
        return Err(not_found(ContentKind::HowWeWorkStep, id));
    }

    tracing::info!(step_id = id, user_id = user.user_id, "Process step deleted");
    let message = after_mutation(&state, ContentKind::HowWeWorkStep, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/how-we-work/stats
pub async fn list_stats(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HowWeWorkStat>>>> {
    let stats = HowWeWorkStatRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/admin/how-we-work/stats/{id}
pub async fn get_stat(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<HowWeWorkStat>>> {
    let stat = HowWeWorkStatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ContentKind::HowWeWorkStat, id))?;
    Ok(Json(DataResponse { data: stat }))
}

/// POST /api/v1/admin/how-we-work/stats
pub async fn create_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHowWeWorkStat>,
) -> AppResult<(StatusCode, Json<MutationResponse<HowWeWorkStat>>)> {
    input.validate()?;
    let stat = HowWeWorkStatRepo::create(&state.pool, &input).await?;

    tracing::info!(stat_id = stat.id, user_id = user.user_id, "Stat created");
    let message = after_mutation(&state, ContentKind::HowWeWorkStat, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: stat,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/how-we-work/stats/{id}
pub async fn update_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateHowWeWorkStat>,
) -> AppResult<Json<MutationResponse<HowWeWorkStat>>> {
    input.validate()?;
    let stat = HowWeWorkStatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ContentKind::HowWeWorkStat, id))?;

    tracing::info!(stat_id = id, user_id = user.user_id, "Stat updated");
    let message = after_mutation(&state, ContentKind::HowWeWorkStat, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: stat,
        message,
    }))
}

/// DELETE /api/v1/admin/how-we-work/stats/{id}
pub async fn delete_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !HowWeWorkStatRepo::delete(&state.pool, id).await? {
        return Err(not_found(ContentKind::HowWeWorkStat, id));
    }

    tracing::info!(stat_id = id, user_id = user.user_id, "Stat deleted");
    let message = after_mutation(&state, ContentKind::HowWeWorkStat, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}

// ---------------------------------------------------------------------------
// Services marquee
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/how-we-work/services
pub async fn list_services(
    _editor: RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ServiceMarquee>>>> {
    let services = ServiceMarqueeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/v1/admin/how-we-work/services/{id}
pub async fn get_service(
    _editor: RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ServiceMarquee>>> {
    let service = ServiceMarqueeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ContentKind::ServiceMarquee, id))?;
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/how-we-work/services
pub async fn create_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateServiceMarquee>,
) -> AppResult<(StatusCode, Json<MutationResponse<ServiceMarquee>>)> {
    input.validate()?;
    let service = ServiceMarqueeRepo::create(&state.pool, &input).await?;

    tracing::info!(service_id = service.id, user_id = user.user_id, "Service created");
    let message = after_mutation(&state, ContentKind::ServiceMarquee, Mutation::Created).await;
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: service,
            message,
        }),
    ))
}

/// PUT /api/v1/admin/how-we-work/services/{id}
pub async fn update_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateServiceMarquee>,
) -> AppResult<Json<MutationResponse<ServiceMarquee>>> {
    input.validate()?;
    let service = ServiceMarqueeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ContentKind::ServiceMarquee, id))?;

    tracing::info!(service_id = id, user_id = user.user_id, "Service updated");
    let message = after_mutation(&state, ContentKind::ServiceMarquee, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: service,
        message,
    }))
}

/// DELETE /api/v1/admin/how-we-work/services/{id}
pub async fn delete_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ServiceMarqueeRepo::delete(&state.pool, id).await? {
        return Err(not_found(ContentKind::ServiceMarquee, id));
    }

    tracing::info!(service_id = id, user_id = user.user_id, "Service deleted");
    let message = after_mutation(&state, ContentKind::ServiceMarquee, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}
