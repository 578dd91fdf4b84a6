//! Hero banner settings model and DTOs.
//!
//! The table holds at most one row; see `uq_hero_settings_singleton`.

use luther_core::hero::BackgroundType;
use luther_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hero_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSettings {
    pub id: DbId,
    /// `"video"` or `"image"`.
    pub background_type: String,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub poster_url: Option<String>,
    pub tagline: Option<String>,
    pub title: Option<String>,
    pub button_text: Option<String>,
    /// `NULL` means "never set"; the public hero then shows the defaults.
    pub services: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the hero settings row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHeroSettings {
    pub background_type: Option<BackgroundType>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub poster_url: Option<String>,
    pub tagline: Option<String>,
    pub title: Option<String>,
    pub button_text: Option<String>,
    pub services: Option<Vec<String>>,
}

/// DTO for partially updating the hero settings row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHeroSettings {
    pub background_type: Option<BackgroundType>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub poster_url: Option<String>,
    pub tagline: Option<String>,
    pub title: Option<String>,
    pub button_text: Option<String>,
    pub services: Option<Vec<String>>,
}
