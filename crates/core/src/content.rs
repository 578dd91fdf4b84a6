//! Content entity kinds and the field rules shared by their create/update
//! payloads.

use crate::error::CoreError;

/// Lowest accepted testimonial rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted testimonial rating; also the display default.
pub const MAX_RATING: i32 = 5;

/// Every record type persisted in the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Project,
    Testimonial,
    Faq,
    HeroSettings,
    HowWeWorkStep,
    HowWeWorkStat,
    ServiceMarquee,
    ContactSubmission,
}

impl ContentKind {
    /// Human-readable entity name used in errors and notifications.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Project => "Project",
            ContentKind::Testimonial => "Testimonial",
            ContentKind::Faq => "FAQ",
            ContentKind::HeroSettings => "Hero settings",
            ContentKind::HowWeWorkStep => "Process step",
            ContentKind::HowWeWorkStat => "Stat",
            ContentKind::ServiceMarquee => "Service",
            ContentKind::ContactSubmission => "Submission",
        }
    }

    /// Query-cache family this entity's reads are stored under. Matches the
    /// table name.
    pub fn cache_family(self) -> &'static str {
        match self {
            ContentKind::Project => "projects",
            ContentKind::Testimonial => "testimonials",
            ContentKind::Faq => "faqs",
            ContentKind::HeroSettings => "hero_settings",
            ContentKind::HowWeWorkStep => "how_we_work_steps",
            ContentKind::HowWeWorkStat => "how_we_work_stats",
            ContentKind::ServiceMarquee => "services_marquee",
            ContentKind::ContactSubmission => "contact_submissions",
        }
    }

    /// Whether this entity is rendered on the public home page.
    pub fn on_home_page(self) -> bool {
        !matches!(self, ContentKind::ContactSubmission)
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Reject blank values for a required text field.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// A patch may omit a required field but must not blank it out.
pub fn require_text_if_present(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(field, v),
        None => Ok(()),
    }
}

/// Ratings are optional; when present they must be within 1..=5.
pub fn validate_rating(rating: Option<i32>) -> Result<(), CoreError> {
    match rating {
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(CoreError::Validation(
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}"),
        )),
        _ => Ok(()),
    }
}

pub fn validate_display_order(order: Option<i32>) -> Result<(), CoreError> {
    match order {
        Some(o) if o < 0 => Err(CoreError::Validation(
            "Display order must not be negative".into(),
        )),
        _ => Ok(()),
    }
}

/// Drop blank entries from a list field (services, step points).
pub fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
