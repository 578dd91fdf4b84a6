//! Admin inbox for contact-form submissions.

use axum::extract::State;
use axum::Json;
use luther_core::contact::{StatusFilter, SubmissionStatus};
use luther_core::content::ContentKind;
use luther_core::notify::Mutation;
use luther_core::types::DbId;
use luther_db::models::contact::{ContactSubmission, UpdateSubmissionStatus};
use luther_db::repositories::ContactSubmissionRepo;

use super::{after_mutation, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusParams;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

const KIND: ContentKind = ContentKind::ContactSubmission;

/// GET /api/v1/admin/messages?status=
///
/// Newest first. `status` is one of `new`, `read`, `replied`, `archived`
/// or `all` (the default).
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<StatusParams>,
) -> AppResult<Json<DataResponse<Vec<ContactSubmission>>>> {
    let filter = StatusFilter::parse(params.status.as_deref())?;
    let submissions = ContactSubmissionRepo::list(&state.pool, filter).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// GET /api/v1/admin/messages/{id}
///
/// Opening a `new` message marks it `read`.
pub async fn get_by_id(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ContactSubmission>>> {
    let submission = ContactSubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    let opened = submission
        .status
        .parse::<SubmissionStatus>()
        .ok()
        .and_then(SubmissionStatus::after_open);

    let submission = match opened {
        Some(next) => {
            let updated = ContactSubmissionRepo::update_status(&state.pool, id, next)
                .await?
                .ok_or_else(|| not_found(KIND, id))?;
            state.cache.invalidate(KIND).await;
            tracing::debug!(submission_id = id, user_id = user.user_id, "Message marked read");
            updated
        }
        None => submission,
    };

    Ok(Json(DataResponse { data: submission }))
}

/// PUT /api/v1/admin/messages/{id}
pub async fn update_status(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateSubmissionStatus>,
) -> AppResult<Json<MutationResponse<ContactSubmission>>> {
    let status: SubmissionStatus = input.status.parse()?;
    let submission = ContactSubmissionRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| not_found(KIND, id))?;

    tracing::info!(
        submission_id = id,
        user_id = user.user_id,
        status = %status,
        "Message status updated"
    );
    let message = after_mutation(&state, KIND, Mutation::Updated).await;
    Ok(Json(MutationResponse {
        data: submission,
        message,
    }))
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ContactSubmissionRepo::delete(&state.pool, id).await? {
        return Err(not_found(KIND, id));
    }

    tracing::info!(submission_id = id, user_id = user.user_id, "Message deleted");
    let message = after_mutation(&state, KIND, Mutation::Deleted).await;
    Ok(Json(MessageResponse { message }))
}
