//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::session_user::SessionUser;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    /// Admin ID
    pub id: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user: SessionUserDto,
}

// ============================================================================
// Session Status
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user: Option<SessionUserDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserDto {
    pub username: String,
    pub id: String,
    pub name: String,
}

impl From<SessionUser> for SessionUserDto {
    fn from(user: SessionUser) -> Self {
        Self {
            username: user.username,
            id: user.id,
            name: user.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_deserialization() {
        let req: SignInRequest =
            serde_json::from_str(r#"{"username":"admin","id":"admin123"}"#).unwrap();
        assert_eq!(req.username, "admin");
        assert_eq!(req.id, "admin123");
    }

    #[test]
    fn test_anonymous_status_serialization() {
        let json = serde_json::to_string(&SessionStatusResponse {
            authenticated: false,
            user: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"authenticated":false,"user":null}"#);
    }
}
