//! Repository for the `projects` table.

use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, image_url, logo_url, \
                       featured_image_url, content, date, duration, featured, \
                       display_order, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Blank optional text is stored as `NULL`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, category, image_url, logo_url, featured_image_url,
                 content, date, duration, featured, display_order)
             VALUES ($1, NULLIF($2, ''), NULLIF($3, ''), NULLIF($4, ''), NULLIF($5, ''),
                     NULLIF($6, ''), NULLIF($7, ''), NULLIF($8, ''), NULLIF($9, ''),
                     COALESCE($10, false), COALESCE($11, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.logo_url)
            .bind(&input.featured_image_url)
            .bind(&input.content)
            .bind(&input.date)
            .bind(&input.duration)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY display_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// IDs of all projects in display order, for previous/next navigation.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM projects ORDER BY display_order ASC, created_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; an
    /// empty string clears a nullable field.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = CASE WHEN $3::TEXT IS NULL THEN description ELSE NULLIF($3, '') END,
                category = CASE WHEN $4::TEXT IS NULL THEN category ELSE NULLIF($4, '') END,
                image_url = CASE WHEN $5::TEXT IS NULL THEN image_url ELSE NULLIF($5, '') END,
                logo_url = CASE WHEN $6::TEXT IS NULL THEN logo_url ELSE NULLIF($6, '') END,
                featured_image_url = CASE WHEN $7::TEXT IS NULL THEN featured_image_url
                                          ELSE NULLIF($7, '') END,
                content = CASE WHEN $8::TEXT IS NULL THEN content ELSE NULLIF($8, '') END,
                date = CASE WHEN $9::TEXT IS NULL THEN date ELSE NULLIF($9, '') END,
                duration = CASE WHEN $10::TEXT IS NULL THEN duration ELSE NULLIF($10, '') END,
                featured = COALESCE($11, featured),
                display_order = COALESCE($12, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.logo_url)
            .bind(&input.featured_image_url)
            .bind(&input.content)
            .bind(&input.date)
            .bind(&input.duration)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
