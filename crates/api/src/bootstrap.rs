//! First-run admin account.

use luther_core::error::CoreError;
use luther_core::roles::ROLE_ADMIN;
use luther_db::models::user::CreateUser;
use luther_db::repositories::{RoleRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Create the seed admin unless a user with that username already exists.
///
/// Returns `true` when an account was created.
pub async fn ensure_admin(pool: &PgPool, seed: &AdminSeed) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &seed.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %seed.username, "Bootstrap admin already exists");
        return Ok(false);
    }

    validate_password_strength(&seed.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or_else(|| AppError::InternalError("admin role is not seeded".into()))?;

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: seed.username.clone(),
            email: seed.email.clone(),
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}
