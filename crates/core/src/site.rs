//! Display shapes for the public site and the helpers that build them.
//!
//! Ids are rendered as strings so stored rows and the static fallback
//! content share one shape.

use serde::Serialize;

use crate::content::MAX_RATING;
use crate::types::{DbId, Timestamp};

/// Image shown for a project that has none.
pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80";

/// Avatar shown for a testimonial author without one.
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop";

/// How many testimonials the home page shows.
pub const HOME_TESTIMONIAL_LIMIT: usize = 4;

// ---------------------------------------------------------------------------
// Display types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub background_type: String,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub poster_url: Option<String>,
    pub tagline: Option<String>,
    pub title: Option<String>,
    pub button_text: Option<String>,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub image: String,
    pub logo: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub featured_image: Option<String>,
    pub content: Option<String>,
    pub previous_id: Option<String>,
    pub next_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialCard {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub avatar: String,
    pub rating: i32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStep {
    pub phase: String,
    pub number: String,
    pub title: String,
    pub duration: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatItem {
    pub value: String,
    pub label: String,
    pub unit: String,
    pub is_highlighted: bool,
}

/// A public list plus whether it came from the static defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<T: Serialize> {
    pub items: Vec<T>,
    pub is_fallback: bool,
}

impl<T: Serialize> Section<T> {
    /// Use `stored` when it has rows, otherwise the output of `fallback`.
    pub fn or_fallback(stored: Vec<T>, fallback: impl FnOnce() -> Vec<T>) -> Self {
        if stored.is_empty() {
            Section {
                items: fallback(),
                is_fallback: true,
            }
        } else {
            Section {
                items: stored,
                is_fallback: false,
            }
        }
    }

    /// Keep at most `limit` items.
    pub fn truncated(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.items.truncate(limit);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The project's free-text date, or its creation date as "October 30, 2025".
pub fn display_date(date: Option<&str>, created_at: Timestamp) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d.to_string(),
        None => created_at.format("%B %-d, %Y").to_string(),
    }
}

/// Rating to render; unrated testimonials show full marks.
pub fn display_rating(rating: Option<i32>) -> i32 {
    rating.unwrap_or(MAX_RATING)
}

/// Previous and next ids around `current` in an ordered list, wrapping at
/// both ends. `None` when `current` is not in the list.
pub fn neighbors(ordered: &[DbId], current: DbId) -> Option<(DbId, DbId)> {
    let idx = ordered.iter().position(|&id| id == current)?;
    let len = ordered.len();
    let prev = ordered[(idx + len - 1) % len];
    let next = ordered[(idx + 1) % len];
    Some((prev, next))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_prefers_stored_text() {
        let created = chrono::Utc.with_ymd_and_hms(2025, 10, 3, 12, 0, 0).unwrap();
        assert_eq!(display_date(Some("Spring 2024"), created), "Spring 2024");
        assert_eq!(display_date(None, created), "October 3, 2025");
        assert_eq!(display_date(Some("  "), created), "October 3, 2025");
    }

    #[test]
    fn neighbors_wrap_around() {
        let ids = [10, 20, 30];
        assert_eq!(neighbors(&ids, 10), Some((30, 20)));
        assert_eq!(neighbors(&ids, 30), Some((20, 10)));
        assert_eq!(neighbors(&[7], 7), Some((7, 7)));
        assert_eq!(neighbors(&ids, 99), None);
    }

    #[test]
    fn section_falls_back_when_empty() {
        let s = Section::or_fallback(Vec::<i32>::new(), || vec![1, 2, 3]);
        assert!(s.is_fallback);
        assert_eq!(s.items, vec![1, 2, 3]);

        let s = Section::or_fallback(vec![9], || vec![1, 2, 3]).truncated(Some(0));
        assert!(!s.is_fallback);
        assert!(s.items.is_empty());
    }

    #[test]
    fn unrated_shows_full_marks() {
        assert_eq!(display_rating(None), 5);
        assert_eq!(display_rating(Some(3)), 3);
    }
}
