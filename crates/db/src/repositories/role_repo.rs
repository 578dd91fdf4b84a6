//! Lookups against the seeded `roles` table (`admin`, `editor`).

use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Reported for a `role_id` whose row no longer exists.
pub const UNKNOWN_ROLE: &str = "unknown";

pub struct RoleRepo;

impl RoleRepo {
    /// The role row called `name`, or `None` for names that were never seeded.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>(
            "SELECT id, name, description, created_at, updated_at
             FROM roles WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Name carried in tokens and user responses for `role_id`.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_optional(pool)
            .await?;
        Ok(name.unwrap_or_else(|| UNKNOWN_ROLE.to_string()))
    }
}
