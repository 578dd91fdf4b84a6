//! "How we work" page content: process steps, headline stats and the
//! services marquee.

use luther_core::content::{require_text, require_text_if_present, validate_display_order};
use luther_core::error::CoreError;
use luther_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Process steps
// ---------------------------------------------------------------------------

/// A row from the `how_we_work_steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HowWeWorkStep {
    pub id: DbId,
    /// Phase label, e.g. "Phase 1".
    pub phase: String,
    /// Display number, e.g. "01".
    pub step_number: String,
    pub title: String,
    pub duration: Option<String>,
    pub points: Vec<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHowWeWorkStep {
    pub phase: String,
    pub step_number: String,
    pub title: String,
    pub duration: Option<String>,
    pub points: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

impl CreateHowWeWorkStep {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Phase", &self.phase)?;
        require_text("Step number", &self.step_number)?;
        require_text("Title", &self.title)?;
        validate_display_order(self.display_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHowWeWorkStep {
    pub phase: Option<String>,
    pub step_number: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub points: Option<Vec<String>>,
    pub display_order: Option<i32>,
}

impl UpdateHowWeWorkStep {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Phase", self.phase.as_deref())?;
        require_text_if_present("Step number", self.step_number.as_deref())?;
        require_text_if_present("Title", self.title.as_deref())?;
        validate_display_order(self.display_order)
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// A row from the `how_we_work_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HowWeWorkStat {
    pub id: DbId,
    pub stat_value: String,
    pub label: String,
    pub unit: String,
    pub is_highlighted: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHowWeWorkStat {
    pub stat_value: String,
    pub label: String,
    pub unit: String,
    pub is_highlighted: Option<bool>,
    pub display_order: Option<i32>,
}

impl CreateHowWeWorkStat {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Value", &self.stat_value)?;
        require_text("Label", &self.label)?;
        require_text("Unit", &self.unit)?;
        validate_display_order(self.display_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHowWeWorkStat {
    pub stat_value: Option<String>,
    pub label: Option<String>,
    pub unit: Option<String>,
    pub is_highlighted: Option<bool>,
    pub display_order: Option<i32>,
}

impl UpdateHowWeWorkStat {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Value", self.stat_value.as_deref())?;
        require_text_if_present("Label", self.label.as_deref())?;
        require_text_if_present("Unit", self.unit.as_deref())?;
        validate_display_order(self.display_order)
    }
}

// ---------------------------------------------------------------------------
// Services marquee
// ---------------------------------------------------------------------------

/// A row from the `services_marquee` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceMarquee {
    pub id: DbId,
    pub service_name: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateServiceMarquee {
    pub service_name: String,
    pub display_order: Option<i32>,
}

impl CreateServiceMarquee {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Service name", &self.service_name)?;
        validate_display_order(self.display_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateServiceMarquee {
    pub service_name: Option<String>,
    pub display_order: Option<i32>,
}

impl UpdateServiceMarquee {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("Service name", self.service_name.as_deref())?;
        validate_display_order(self.display_order)
    }
}
