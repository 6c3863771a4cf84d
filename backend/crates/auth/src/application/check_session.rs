//! Check Session Use Case
//!
//! Resolves a session token against the slot.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// The session named by `session_token`, if it still occupies the slot.
    ///
    /// Tokens from a session that was logged out or replaced are rejected.
    pub async fn execute(&self, session_token: &str) -> AuthResult<AdminSession> {
        let session_id = parse_session_token(session_token, &self.config.session_secret)?;

        let session = self
            .session_repo
            .current()
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.session_id != session_id {
            tracing::debug!(
                token_session_id = %session_id,
                "Token names a session that is no longer current"
            );
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
