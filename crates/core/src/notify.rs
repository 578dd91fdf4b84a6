//! Success notification text returned alongside mutation results.

use crate::content::ContentKind;

/// The three write operations every content entity supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Created => "created",
            Mutation::Updated => "updated",
            Mutation::Deleted => "deleted",
        }
    }
}

/// Notification shown to the user after a successful mutation.
pub fn success_message(kind: ContentKind, mutation: Mutation) -> String {
    match (kind, mutation) {
        (ContentKind::ContactSubmission, Mutation::Created) => "Message sent successfully!".into(),
        (ContentKind::ContactSubmission, Mutation::Updated) => "Status updated".into(),
        (ContentKind::ContactSubmission, Mutation::Deleted) => "Submission deleted".into(),
        (kind, mutation) => format!("{} {} successfully", kind.label(), mutation.verb()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_messages() {
        assert_eq!(
            success_message(ContentKind::Project, Mutation::Created),
            "Project created successfully"
        );
        assert_eq!(
            success_message(ContentKind::Faq, Mutation::Deleted),
            "FAQ deleted successfully"
        );
    }

    #[test]
    fn contact_messages() {
        assert_eq!(
            success_message(ContentKind::ContactSubmission, Mutation::Created),
            "Message sent successfully!"
        );
        assert_eq!(
            success_message(ContentKind::ContactSubmission, Mutation::Updated),
            "Status updated"
        );
    }
}
