//! Admin Credentials
//!
//! The panel has exactly one operator account with a fixed credential pair.
//! This is a placeholder gate, not a security boundary: matching is exact,
//! case-sensitive, and performs no trimming or normalization.

use platform::crypto::constant_time_eq;

/// Username of the single operator account
pub const ADMIN_USERNAME: &str = "admin";
/// Admin ID of the single operator account
pub const ADMIN_ID: &str = "admin123";
/// Display name given to the session user on login
pub const ADMIN_DISPLAY_NAME: &str = "Admin User";

/// Expected username / admin ID pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    id: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: id.into(),
        }
    }

    /// The hardcoded `admin` / `admin123` pair
    pub fn fixed() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_ID)
    }

    /// Exact comparison. Both fields are always compared.
    pub fn matches(&self, username: &str, id: &str) -> bool {
        let username_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let id_ok = constant_time_eq(self.id.as_bytes(), id.as_bytes());
        username_ok & id_ok
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pair_matches() {
        assert!(AdminCredentials::fixed().matches("admin", "admin123"));
    }

    #[test]
    fn test_matching_is_exact() {
        let creds = AdminCredentials::fixed();
        assert!(!creds.matches("Admin", "admin123"));
        assert!(!creds.matches("admin", "ADMIN123"));
        assert!(!creds.matches(" admin", "admin123"));
        assert!(!creds.matches("admin", "admin123 "));
        assert!(!creds.matches("admin", "wrong"));
        assert!(!creds.matches("", ""));
    }
}
