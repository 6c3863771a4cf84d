//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username / admin ID pair
    #[error("Invalid username or ID")]
    AuthenticationFailed,

    /// Missing, tampered, or superseded session token
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthenticationFailed | AuthError::SessionInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AuthenticationFailed | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::AuthenticationFailed => err.with_action("Check your username and admin ID"),
            AuthError::SessionInvalid => err.with_action("Please sign in again"),
            AuthError::Internal(_) => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AuthenticationFailed => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();
        if matches!(self, AuthError::SessionInvalid) {
            response
                .headers_mut()
                .insert("X-Auth-Required", axum::http::HeaderValue::from_static("true"));
        }
        response
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let cases = vec![
            (AuthError::AuthenticationFailed, StatusCode::UNAUTHORIZED),
            (AuthError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (
                AuthError::Internal("slot poisoned".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_session_invalid_sets_auth_required_header() {
        let response = AuthError::SessionInvalid.into_response();
        assert_eq!(
            response.headers().get("X-Auth-Required").unwrap(),
            "true"
        );

        let response = AuthError::AuthenticationFailed.into_response();
        assert!(response.headers().get("X-Auth-Required").is_none());
    }

    #[test]
    fn test_to_app_error_carries_action() {
        let err = AuthError::AuthenticationFailed.to_app_error();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.message(), "Invalid username or ID");
        assert!(err.action().is_some());
    }
}
