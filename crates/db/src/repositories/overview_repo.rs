//! Aggregate counts for the admin overview.

use sqlx::PgPool;

use crate::models::overview::ContentCounts;

pub struct OverviewRepo;

impl OverviewRepo {
    /// Row counts for every content table in one round trip.
    pub async fn counts(pool: &PgPool) -> Result<ContentCounts, sqlx::Error> {
        sqlx::query_as::<_, ContentCounts>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM projects WHERE featured) AS featured_projects,
                (SELECT COUNT(*) FROM testimonials) AS testimonials,
                (SELECT COUNT(*) FROM testimonials WHERE featured) AS featured_testimonials,
                (SELECT COUNT(*) FROM faqs) AS faqs,
                (SELECT COUNT(*) FROM how_we_work_steps) AS how_we_work_steps,
                (SELECT COUNT(*) FROM how_we_work_stats) AS how_we_work_stats,
                (SELECT COUNT(*) FROM services_marquee) AS services,
                (SELECT COUNT(*) FROM contact_submissions) AS messages,
                (SELECT COUNT(*) FROM contact_submissions WHERE status = 'new') AS new_messages,
                EXISTS (SELECT 1 FROM hero_settings) AS hero_configured",
        )
        .fetch_one(pool)
        .await
    }
}
