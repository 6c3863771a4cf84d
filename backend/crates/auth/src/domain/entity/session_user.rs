//! Session User Entity
//!
//! The identity attached to an authenticated session. Lives only as long as
//! the session slot holding it.

use crate::domain::value_object::credentials::ADMIN_DISPLAY_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub id: String,
    /// Display name, always [`ADMIN_DISPLAY_NAME`] for the operator
    pub name: String,
}

impl SessionUser {
    /// The operator user created on a successful login
    pub fn admin(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: id.into(),
            name: ADMIN_DISPLAY_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_display_name_is_fixed() {
        let user = SessionUser::admin("admin", "admin123");
        assert_eq!(user.username, "admin");
        assert_eq!(user.id, "admin123");
        assert_eq!(user.name, "Admin User");
    }
}
