//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::SessionGate;
use crate::domain::repository::SessionRepository;
use crate::infra::memory::InMemorySessionRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router over the in-memory session slot
pub fn auth_router(gate: Arc<SessionGate<InMemorySessionRepository>>) -> Router {
    auth_router_generic(gate)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<S>(gate: Arc<SessionGate<S>>) -> Router
where
    S: SessionRepository + Send + Sync + 'static,
{
    let state = AuthAppState { gate };

    Router::new()
        .route("/signin", post(handlers::sign_in::<S>))
        .route("/signout", post(handlers::sign_out::<S>))
        .route("/status", get(handlers::session_status::<S>))
        .with_state(state)
}
