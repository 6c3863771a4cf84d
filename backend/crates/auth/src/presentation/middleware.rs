//! Auth Middleware
//!
//! Middleware for requiring an admin session on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::SessionGate;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub gate: Arc<SessionGate<S>>,
}

impl<S> Clone for AuthMiddlewareState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

/// Rejects the request with 401 + `X-Auth-Required: true` unless its
/// session cookie names the current admin session.
///
/// On success the [`AdminSession`](crate::domain::AdminSession) is inserted
/// into the request extensions.
pub async fn require_admin_session<S>(
    State(state): State<AuthMiddlewareState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.gate.config().session_cookie_name);

    let Some(token) = token else {
        tracing::debug!("No admin session cookie");
        return Err(AuthError::SessionInvalid.into_response());
    };

    let session = state
        .gate
        .check_token(&token)
        .await
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
