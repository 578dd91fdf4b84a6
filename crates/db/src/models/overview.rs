//! Aggregate counts for the admin overview page.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct ContentCounts {
    pub projects: i64,
    pub featured_projects: i64,
    pub testimonials: i64,
    pub featured_testimonials: i64,
    pub faqs: i64,
    pub how_we_work_steps: i64,
    pub how_we_work_stats: i64,
    pub services: i64,
    pub messages: i64,
    pub new_messages: i64,
    pub hero_configured: bool,
}
