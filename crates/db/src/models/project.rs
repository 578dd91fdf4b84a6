//! Project (portfolio case study) model and DTOs.

use luther_core::content::{require_text, require_text_if_present, validate_display_order};
use luther_core::error::CoreError;
use luther_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub featured_image_url: Option<String>,
    /// Rich-text body (HTML from the admin editor).
    pub content: Option<String>,
    /// Free-text date label, e.g. "October 30, 2025".
    pub date: Option<String>,
    pub duration: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub featured_image_url: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Title", &self.title)?;
        validate_display_order(self.display_order)
    }
}

/// DTO for partially updating a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub featured_image_url: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Title", self.title.as_deref())?;
        validate_display_order(self.display_order)
    }
}
