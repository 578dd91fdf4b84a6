//! Contact form validation and message status rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Triage state of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::New,
        SubmissionStatus::Read,
        SubmissionStatus::Replied,
        SubmissionStatus::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Replied => "replied",
            SubmissionStatus::Archived => "archived",
        }
    }

    /// Status a message moves to when an admin opens it.
    ///
    /// Only unread messages change; anything already triaged keeps its state.
    pub fn after_open(self) -> Option<SubmissionStatus> {
        match self {
            SubmissionStatus::New => Some(SubmissionStatus::Read),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: new, read, replied, archived"
                ))
            })
    }
}

/// Inbox filter: every message, or only those in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubmissionStatus),
}

impl StatusFilter {
    /// Parse the `?status=` query value. Missing or `all` means no filter.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Ok(StatusFilter::All),
            Some(other) => other.parse().map(StatusFilter::Only),
        }
    }

    pub fn status(self) -> Option<SubmissionStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(s) => Some(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Longest accepted value per contact form field, in characters.
pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 255;
pub const MAX_PHONE_CHARS: usize = 40;
pub const MAX_COMPANY_CHARS: usize = 150;
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Public contact form payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Trim every field and turn blank optional fields into `None`, then
    /// validate.
    pub fn normalized(self) -> Result<ContactForm, CoreError> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone),
            company: non_blank(self.company),
            message: self.message.trim().to_string(),
        };
        form.validate()?;
        form.check_max_lengths()?;
        Ok(form)
    }

    fn check_max_lengths(&self) -> Result<(), CoreError> {
        let fields = [
            ("Name", Some(&self.name), MAX_NAME_CHARS),
            ("Email", Some(&self.email), MAX_EMAIL_CHARS),
            ("Phone", self.phone.as_ref(), MAX_PHONE_CHARS),
            ("Company", self.company.as_ref(), MAX_COMPANY_CHARS),
            ("Message", Some(&self.message), MAX_MESSAGE_CHARS),
        ];
        for (label, value, max) in fields {
            if value.is_some_and(|v| v.chars().count() > max) {
                return Err(CoreError::Validation(format!(
                    "{label} must be at most {max} characters"
                )));
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            company: Some("   ".to_string()),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let f = form("  Ada ", " ada@example.com ", "I would like a new website.")
            .normalized()
            .expect("form should be valid");
        assert_eq!(f.name, "Ada");
        assert_eq!(f.email, "ada@example.com");
        assert_eq!(f.company, None);
    }

    #[test]
    fn short_name_rejected() {
        let err = form("A", "a@example.com", "long enough message").normalized();
        assert_matches!(err, Err(CoreError::Validation(msg)) if msg.contains("Name must be at least 2"));
    }

    #[test]
    fn bad_email_and_short_message_both_reported() {
        let err = form("Ada", "not-an-email", "short").normalized();
        let Err(CoreError::Validation(msg)) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("Please enter a valid email"));
        assert!(msg.contains("Message must be at least 10 characters"));
    }

    #[test]
    fn oversized_fields_rejected() {
        let long_message = "x".repeat(MAX_MESSAGE_CHARS + 1);
        let err = form("Ada", "ada@example.com", &long_message).normalized();
        assert_matches!(
            err,
            Err(CoreError::Validation(msg)) if msg == "Message must be at most 5000 characters"
        );

        let mut f = form("Ada", "ada@example.com", "I would like a new website.");
        f.company = Some("c".repeat(MAX_COMPANY_CHARS + 1));
        assert_matches!(f.normalized(), Err(CoreError::Validation(msg)) if msg.starts_with("Company"));

        let exact = "x".repeat(MAX_MESSAGE_CHARS);
        assert!(form("Ada", "ada@example.com", &exact).normalized().is_ok());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in SubmissionStatus::ALL {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
        assert!("spam".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn opening_marks_only_new_as_read() {
        assert_eq!(SubmissionStatus::New.after_open(), Some(SubmissionStatus::Read));
        assert_eq!(SubmissionStatus::Replied.after_open(), None);
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!(StatusFilter::parse(None).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("all")).unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse(Some("archived")).unwrap(),
            StatusFilter::Only(SubmissionStatus::Archived)
        );
        assert_matches!(StatusFilter::parse(Some("junk")), Err(CoreError::Validation(_)));
    }
}
