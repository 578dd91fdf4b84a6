//! Handlers for `/admin/users` (CMS account management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use luther_core::error::CoreError;
use luther_core::types::DbId;
use luther_db::models::user::{CreateUser, UserResponse};
use luther_db::repositories::{RoleRepo, SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse, MutationResponse};
use crate::state::AppState;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    pub password: String,
    /// Role name, `admin` or `editor`.
    pub role: String,
}

/// GET /api/v1/admin/users
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list_with_roles(&state.pool)
        .await?
        .into_iter()
        .map(|row| UserResponse::from_user(row.user, row.role_name))
        .collect();

    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/users
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<MutationResponse<UserResponse>>)> {
    input.validate().map_err(CoreError::from)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = RoleRepo::find_by_name(&state.pool, &input.role)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown role '{}'",
                input.role
            )))
        })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(
        new_user_id = user.id,
        role = %role.name,
        user_id = admin.user_id,
        "User created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: UserResponse::from_user(user, role.name),
            message: "User created successfully".to_string(),
        }),
    ))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Deactivates the account and revokes its sessions. Rows are kept.
pub async fn deactivate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if id == admin.user_id {
        return Err(AppError::BadRequest(
            "You cannot deactivate your own account".into(),
        ));
    }

    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    UserRepo::deactivate(&state.pool, id).await?;
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(
        target_user_id = id,
        sessions_revoked = revoked,
        user_id = admin.user_id,
        "User deactivated"
    );
    Ok(Json(MessageResponse {
        message: "User deactivated".to_string(),
    }))
}
