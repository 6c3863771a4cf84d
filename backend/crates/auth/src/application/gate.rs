//! Session Gate
//!
//! Single-slot authentication guarding every mutating review operation.
//!
//! Two states: anonymous (initial) and authenticated.
//! - `login` moves to authenticated only on an exact credential match;
//!   a failed login changes nothing.
//! - `logout` always ends in anonymous and never fails.
//! - A successful login while authenticated replaces the slot, which
//!   invalidates tokens issued for the previous session.

use std::sync::Arc;

use kernel::notify::SharedNotifier;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::domain::entity::{admin_session::AdminSession, session_user::SessionUser};
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::credentials::AdminCredentials;
use crate::error::AuthResult;

pub struct SessionGate<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    credentials: AdminCredentials,
    notifier: SharedNotifier,
}

impl<S> SessionGate<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: S, config: AuthConfig, notifier: SharedNotifier) -> Self {
        Self {
            session_repo: Arc::new(session_repo),
            config: Arc::new(config),
            credentials: AdminCredentials::fixed(),
            notifier,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// `true` iff the credential pair matched and a session was opened
    pub async fn login(&self, username: &str, id: &str) -> bool {
        self.sign_in(username, id).await.is_ok()
    }

    /// [`login`](Self::login), keeping the session and its signed token
    pub async fn sign_in(&self, username: &str, id: &str) -> AuthResult<SignInOutput> {
        SignInUseCase::new(
            self.session_repo.clone(),
            self.config.clone(),
            self.credentials.clone(),
            self.notifier.clone(),
        )
        .execute(SignInInput {
            username: username.to_string(),
            id: id.to_string(),
        })
        .await
    }

    pub async fn logout(&self) {
        if let Err(e) = self.sign_out_use_case().execute().await {
            tracing::error!(error = %e, "Failed to clear admin session");
        }
    }

    /// Logout on behalf of a cookie holder: only the session the token
    /// names is ended, so callers without a live token change nothing.
    pub async fn sign_out(&self, session_token: &str) -> AuthResult<AdminSession> {
        self.sign_out_use_case().execute_token(session_token).await
    }

    fn sign_out_use_case(&self) -> SignOutUseCase<S> {
        SignOutUseCase::new(
            self.session_repo.clone(),
            self.config.clone(),
            self.notifier.clone(),
        )
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_session().await.is_some()
    }

    pub async fn current_user(&self) -> Option<SessionUser> {
        self.current_session().await.map(|session| session.user)
    }

    /// Resolve a session cookie value to the current session
    pub async fn check_token(&self, session_token: &str) -> AuthResult<AdminSession> {
        CheckSessionUseCase::new(self.session_repo.clone(), self.config.clone())
            .execute(session_token)
            .await
    }

    async fn current_session(&self) -> Option<AdminSession> {
        match self.session_repo.current().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read admin session");
                None
            }
        }
    }
}
