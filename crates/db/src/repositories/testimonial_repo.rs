//! Repository for the `testimonials` table.

use luther_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_name, author_role, author_company, author_avatar, \
                       content, rating, featured, display_order, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials
                (author_name, author_role, author_company, author_avatar, content,
                 rating, featured, display_order)
             VALUES ($1, NULLIF($2, ''), NULLIF($3, ''), NULLIF($4, ''), $5,
                     $6, COALESCE($7, false), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(input.author_name.trim())
            .bind(&input.author_role)
            .bind(&input.author_company)
            .bind(&input.author_avatar)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a testimonial by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all testimonials in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             ORDER BY display_order ASC, created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a testimonial. Only non-`None` fields in `input` are applied;
    /// an empty string clears a nullable field.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                author_name = COALESCE($2, author_name),
                author_role = CASE WHEN $3::TEXT IS NULL THEN author_role ELSE NULLIF($3, '') END,
                author_company = CASE WHEN $4::TEXT IS NULL THEN author_company
                                      ELSE NULLIF($4, '') END,
                author_avatar = CASE WHEN $5::TEXT IS NULL THEN author_avatar
                                     ELSE NULLIF($5, '') END,
                content = COALESCE($6, content),
                rating = COALESCE($7, rating),
                featured = COALESCE($8, featured),
                display_order = COALESCE($9, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(input.author_name.as_deref().map(str::trim))
            .bind(&input.author_role)
            .bind(&input.author_company)
            .bind(&input.author_avatar)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.featured)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
