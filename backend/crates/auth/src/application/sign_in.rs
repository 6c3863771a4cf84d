//! Sign In Use Case
//!
//! Checks the credential pair and, on a match, puts a fresh session in the
//! slot.

use std::sync::Arc;

use kernel::notify::{Notification, SharedNotifier};

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::{admin_session::AdminSession, session_user::SessionUser};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::credentials::AdminCredentials;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    /// Admin ID
    pub id: String,
}

/// Sign in output
pub struct SignInOutput {
    pub session: AdminSession,
    /// Signed token for the session cookie
    pub session_token: String,
}

pub struct SignInUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    credentials: AdminCredentials,
    notifier: SharedNotifier,
}

impl<S> SignInUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
        credentials: AdminCredentials,
        notifier: SharedNotifier,
    ) -> Self {
        Self {
            session_repo,
            config,
            credentials,
            notifier,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if !self.credentials.matches(&input.username, &input.id) {
            self.notifier
                .notify(Notification::error("Login Failed", "Invalid username or ID"));
            return Err(AuthError::AuthenticationFailed);
        }

        let session = AdminSession::new(SessionUser::admin(input.username, input.id));
        let previous = self.session_repo.replace(session.clone()).await?;

        if let Some(previous) = previous {
            tracing::info!(
                previous_session_id = %previous.session_id,
                "Existing admin session replaced"
            );
        }

        let session_token = sign_session_token(&session.session_id, &self.config.session_secret);

        tracing::info!(
            username = %session.user.username,
            session_id = %session.session_id,
            "Admin signed in"
        );
        self.notifier.notify(Notification::info(
            "Login Successful",
            "Welcome to the Admin Panel",
        ));

        Ok(SignInOutput {
            session,
            session_token,
        })
    }
}
