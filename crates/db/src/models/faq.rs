//! FAQ model and DTOs.

use luther_core::content::{require_text, require_text_if_present, validate_display_order};
use luther_core::error::CoreError;
use luther_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an FAQ.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub display_order: Option<i32>,
}

impl CreateFaq {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Question", &self.question)?;
        require_text("Answer", &self.answer)?;
        validate_display_order(self.display_order)
    }
}

/// DTO for partially updating an FAQ.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<i32>,
}

impl UpdateFaq {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Question", self.question.as_deref())?;
        require_text_if_present("Answer", self.answer.as_deref())?;
        validate_display_order(self.display_order)
    }
}
