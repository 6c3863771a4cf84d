//! Sign Out Use Case
//!
//! `execute` empties the slot whether or not anyone was signed in.
//! `execute_token` only ends the session the caller's token names.

use std::sync::Arc;

use kernel::notify::{Notification, SharedNotifier};

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    notifier: SharedNotifier,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>, notifier: SharedNotifier) -> Self {
        Self {
            session_repo,
            config,
            notifier,
        }
    }

    /// Returns the session that was ended, if there was one
    pub async fn execute(&self) -> AuthResult<Option<AdminSession>> {
        let ended = self.session_repo.clear().await?;

        match &ended {
            Some(session) => {
                tracing::info!(session_id = %session.session_id, "Admin signed out");
            }
            None => tracing::debug!("Sign out with no active session"),
        }

        self.notify_logged_out();
        Ok(ended)
    }

    /// End the session named by `session_token`.
    ///
    /// A tampered token, or one for a session no longer in the slot, leaves
    /// the slot untouched and fails with `SessionInvalid`.
    pub async fn execute_token(&self, session_token: &str) -> AuthResult<AdminSession> {
        let session_id = parse_session_token(session_token, &self.config.session_secret)?;

        let ended = self
            .session_repo
            .clear_if(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        tracing::info!(session_id = %ended.session_id, "Admin signed out");
        self.notify_logged_out();
        Ok(ended)
    }

    fn notify_logged_out(&self) {
        self.notifier.notify(Notification::info(
            "Logged Out",
            "You have been successfully logged out",
        ));
    }
}
