//! Repository for the `how_we_work_steps` table.

use luther_core::content::clean_list;
use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::how_we_work::{CreateHowWeWorkStep, HowWeWorkStep, UpdateHowWeWorkStep};

const COLUMNS: &str =
    "id, phase, step_number, title, duration, points, display_order, created_at, updated_at";

/// Provides CRUD operations for process steps.
pub struct HowWeWorkStepRepo;

impl HowWeWorkStepRepo {
    /// Insert a new step. Blank points are dropped.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHowWeWorkStep,
    ) -> Result<HowWeWorkStep, sqlx::Error> {
        let query = format!(
            "INSERT INTO how_we_work_steps
                (phase, step_number, title, duration, points, display_order)
             VALUES ($1, $2, $3, NULLIF($4, ''), $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        let points = input.points.as_deref().map(clean_list).unwrap_or_default();
        sqlx::query_as::<_, HowWeWorkStep>(&query)
            .bind(&input.phase)
            .bind(&input.step_number)
            .bind(input.title.trim())
            .bind(&input.duration)
            .bind(points)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HowWeWorkStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM how_we_work_steps WHERE id = $1");
        sqlx::query_as::<_, HowWeWorkStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all steps in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<HowWeWorkStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM how_we_work_steps \
             ORDER BY display_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, HowWeWorkStep>(&query)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHowWeWorkStep,
    ) -> Result<Option<HowWeWorkStep>, sqlx::Error> {
        let query = format!(
            "UPDATE how_we_work_steps SET
                phase = COALESCE($2, phase),
                step_number = COALESCE($3, step_number),
                title = COALESCE($4, title),
                duration = CASE WHEN $5::TEXT IS NULL THEN duration ELSE NULLIF($5, '') END,
                points = COALESCE($6, points),
                display_order = COALESCE($7, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HowWeWorkStep>(&query)
            .bind(id)
            .bind(&input.phase)
            .bind(&input.step_number)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.duration)
            .bind(input.points.as_deref().map(clean_list))
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM how_we_work_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
