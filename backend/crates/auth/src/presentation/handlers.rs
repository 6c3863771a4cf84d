//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};
use std::sync::Arc;

use crate::application::SessionGate;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{SessionStatusResponse, SignInRequest, SignInResponse};

/// Shared state for auth handlers
pub struct AuthAppState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub gate: Arc<SessionGate<S>>,
}

impl<S> Clone for AuthAppState<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: SessionRepository + Send + Sync + 'static,
{
    let output = state.gate.sign_in(&req.username, &req.id).await?;

    let cookie = set_cookie_header(&state.gate.config().cookie_config(), &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            user: output.session.user.into(),
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    S: SessionRepository + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.gate.config().session_cookie_name);

    if let Some(token) = token {
        // A stale or forged cookie still gets cleared below
        if let Err(e) = state.gate.sign_out(&token).await {
            tracing::debug!(error = %e, "Sign out without a live session");
        }
    }

    let cookie = delete_cookie_header(&state.gate.config().cookie_config());

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    S: SessionRepository + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.gate.config().session_cookie_name);

    let session = match token {
        Some(token) => state.gate.check_token(&token).await.ok(),
        None => None,
    };

    Json(SessionStatusResponse {
        authenticated: session.is_some(),
        user: session.map(|s| s.user.into()),
    })
}
