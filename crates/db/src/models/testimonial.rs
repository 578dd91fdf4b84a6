//! Testimonial model and DTOs.

use luther_core::content::{
    require_text, require_text_if_present, validate_display_order, validate_rating,
};
use luther_core::error::CoreError;
use luther_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_role: Option<String>,
    pub author_company: Option<String>,
    pub author_avatar: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTestimonial {
    pub author_name: String,
    pub author_role: Option<String>,
    pub author_company: Option<String>,
    pub author_avatar: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

impl CreateTestimonial {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Author name", &self.author_name)?;
        require_text("Content", &self.content)?;
        validate_rating(self.rating)?;
        validate_display_order(self.display_order)
    }
}

/// DTO for partially updating a testimonial.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub author_company: Option<String>,
    pub author_avatar: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateTestimonial {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Author name", self.author_name.as_deref())?;
        require_text_if_present("Content", self.content.as_deref())?;
        validate_rating(self.rating)?;
        validate_display_order(self.display_order)
    }
}
