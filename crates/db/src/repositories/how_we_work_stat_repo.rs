//! Repository for the `how_we_work_stats` table.

use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::how_we_work::{CreateHowWeWorkStat, HowWeWorkStat, UpdateHowWeWorkStat};

const COLUMNS: &str =
    "id, stat_value, label, unit, is_highlighted, display_order, created_at, updated_at";

/// Provides CRUD operations for headline stats.
pub struct HowWeWorkStatRepo;

impl HowWeWorkStatRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateHowWeWorkStat,
    ) -> Result<HowWeWorkStat, sqlx::Error> {
        let query = format!(
            "INSERT INTO how_we_work_stats (stat_value, label, unit, is_highlighted, display_order)
             VALUES ($1, $2, $3, COALESCE($4, false), COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HowWeWorkStat>(&query)
            .bind(&input.stat_value)
            .bind(&input.label)
            .bind(&input.unit)
            .bind(input.is_highlighted)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HowWeWorkStat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM how_we_work_stats WHERE id = $1");
        sqlx::query_as::<_, HowWeWorkStat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stats in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<HowWeWorkStat>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM how_we_work_stats \
             ORDER BY display_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, HowWeWorkStat>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHowWeWorkStat,
    ) -> Result<Option<HowWeWorkStat>, sqlx::Error> {
        let query = format!(
            "UPDATE how_we_work_stats SET
                stat_value = COALESCE($2, stat_value),
                label = COALESCE($3, label),
                unit = COALESCE($4, unit),
                is_highlighted = COALESCE($5, is_highlighted),
                display_order = COALESCE($6, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HowWeWorkStat>(&query)
            .bind(id)
            .bind(&input.stat_value)
            .bind(&input.label)
            .bind(&input.unit)
            .bind(input.is_highlighted)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM how_we_work_stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
