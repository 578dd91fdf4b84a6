//! Repository for the singleton `hero_settings` table.

use luther_core::content::clean_list;
use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::hero::{CreateHeroSettings, HeroSettings, UpdateHeroSettings};

const COLUMNS: &str = "id, background_type, video_url, image_url, poster_url, tagline, \
                       title, button_text, services, created_at, updated_at";

/// Reads and writes the single hero settings row.
pub struct HeroRepo;

impl HeroRepo {
    /// The hero settings row, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<HeroSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_settings ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, HeroSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert the hero row. A second insert violates
    /// `uq_hero_settings_singleton`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHeroSettings,
    ) -> Result<HeroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_settings
                (background_type, video_url, image_url, poster_url, tagline, title,
                 button_text, services)
             VALUES (COALESCE($1, 'video'), NULLIF($2, ''), NULLIF($3, ''), NULLIF($4, ''),
                     NULLIF($5, ''), NULLIF($6, ''), NULLIF($7, ''), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(input.background_type.map(|t| t.as_str()))
            .bind(&input.video_url)
            .bind(&input.image_url)
            .bind(&input.poster_url)
            .bind(&input.tagline)
            .bind(&input.title)
            .bind(&input.button_text)
            .bind(input.services.as_deref().map(clean_list))
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSettings,
    ) -> Result<Option<HeroSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_settings SET
                background_type = COALESCE($2, background_type),
                video_url = CASE WHEN $3::TEXT IS NULL THEN video_url ELSE NULLIF($3, '') END,
                image_url = CASE WHEN $4::TEXT IS NULL THEN image_url ELSE NULLIF($4, '') END,
                poster_url = CASE WHEN $5::TEXT IS NULL THEN poster_url ELSE NULLIF($5, '') END,
                tagline = CASE WHEN $6::TEXT IS NULL THEN tagline ELSE NULLIF($6, '') END,
                title = CASE WHEN $7::TEXT IS NULL THEN title ELSE NULLIF($7, '') END,
                button_text = CASE WHEN $8::TEXT IS NULL THEN button_text
                                   ELSE NULLIF($8, '') END,
                services = COALESCE($9, services)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(id)
            .bind(input.background_type.map(|t| t.as_str()))
            .bind(&input.video_url)
            .bind(&input.image_url)
            .bind(&input.poster_url)
            .bind(&input.tagline)
            .bind(&input.title)
            .bind(&input.button_text)
            .bind(input.services.as_deref().map(clean_list))
            .fetch_optional(pool)
            .await
    }
}
