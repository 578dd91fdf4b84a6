//! Repository for the `services_marquee` table.

use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::how_we_work::{CreateServiceMarquee, ServiceMarquee, UpdateServiceMarquee};

const COLUMNS: &str = "id, service_name, display_order, created_at, updated_at";

/// Provides CRUD operations for the scrolling services list.
pub struct ServiceMarqueeRepo;

impl ServiceMarqueeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceMarquee,
    ) -> Result<ServiceMarquee, sqlx::Error> {
        let query = format!(
            "INSERT INTO services_marquee (service_name, display_order)
             VALUES ($1, COALESCE($2, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceMarquee>(&query)
            .bind(input.service_name.trim())
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceMarquee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services_marquee WHERE id = $1");
        sqlx::query_as::<_, ServiceMarquee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ServiceMarquee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services_marquee \
             ORDER BY display_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ServiceMarquee>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceMarquee,
    ) -> Result<Option<ServiceMarquee>, sqlx::Error> {
        let query = format!(
            "UPDATE services_marquee SET
                service_name = COALESCE($2, service_name),
                display_order = COALESCE($3, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceMarquee>(&query)
            .bind(id)
            .bind(input.service_name.as_deref().map(str::trim))
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services_marquee WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
