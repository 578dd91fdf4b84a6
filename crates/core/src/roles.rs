//! Well-known role name constants.
//!
//! These must match the seed data in `20260101000002_create_auth_tables.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// Whether `role` may read the inbox, see the overview and manage accounts.
pub fn can_manage_site(role: &str) -> bool {
    role == ROLE_ADMIN
}

/// Whether `role` may create, edit and delete site content.
pub fn can_edit_content(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_editor_edit_content() {
        assert!(can_edit_content(ROLE_ADMIN));
        assert!(can_edit_content(ROLE_EDITOR));
        assert!(!can_edit_content("viewer"));
    }

    #[test]
    fn only_admin_manages_site() {
        assert!(can_manage_site(ROLE_ADMIN));
        assert!(!can_manage_site(ROLE_EDITOR));
    }
}
