//! Repository for the `users` table: CMS accounts and login bookkeeping.

use luther_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::user::{CreateUser, FailedLogin, User, UserWithRole};

const COLUMNS: &str = "id, username, email, password_hash, role_id, is_active, \
                       last_login_at, failed_login_count, locked_until, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Login lookup. Usernames are matched exactly.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Every account with its role name, newest first.
    pub async fn list_with_roles(pool: &PgPool) -> Result<Vec<UserWithRole>, sqlx::Error> {
        sqlx::query_as::<_, UserWithRole>(
            "SELECT u.id, u.username, u.email, u.password_hash, u.role_id, u.is_active,
                    u.last_login_at, u.failed_login_count, u.locked_until,
                    u.created_at, u.updated_at, r.name AS role_name
             FROM users u
             JOIN roles r ON r.id = u.role_id
             ORDER BY u.created_at DESC, u.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Mark an account inactive. Returns `true` if it was active.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count a failed login and lock the account once `max_attempts` is reached.
    ///
    /// A lock that has already expired is cleared and counting restarts at 1.
    pub async fn record_failed_login(
        pool: &PgPool,
        id: DbId,
        max_attempts: i32,
        lock_until: Timestamp,
    ) -> Result<FailedLogin, sqlx::Error> {
        sqlx::query_as::<_, FailedLogin>(
            "WITH counted AS (
                SELECT id,
                       CASE
                           WHEN locked_until IS NOT NULL AND locked_until <= NOW() THEN 1
                           ELSE failed_login_count + 1
                       END AS failures
                FROM users WHERE id = $1
                FOR UPDATE
             )
             UPDATE users u SET
                failed_login_count = counted.failures,
                locked_until = CASE
                    WHEN counted.failures >= $2 THEN $3
                    WHEN u.locked_until <= NOW() THEN NULL
                    ELSE u.locked_until
                END
             FROM counted
             WHERE u.id = counted.id
             RETURNING u.failed_login_count AS failures, u.locked_until",
        )
        .bind(id)
        .bind(max_attempts)
        .bind(lock_until)
        .fetch_one(pool)
        .await
    }

    /// Clear the failure counter and any lock, and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
