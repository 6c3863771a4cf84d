//! Review Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::SubmissionStore;
use crate::domain::repository::SubmissionRepository;
use crate::infra::memory::InMemorySubmissionRepository;
use crate::presentation::handlers::{self, ReviewAppState};

/// Create the Review router over the in-memory collection.
///
/// Carries no auth of its own; mount it behind the admin session layer.
pub fn review_router(store: Arc<SubmissionStore<InMemorySubmissionRepository>>) -> Router {
    review_router_generic(store)
}

/// Create a generic Review router for any repository implementation
pub fn review_router_generic<R>(store: Arc<SubmissionStore<R>>) -> Router
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    let state = ReviewAppState { store };

    Router::new()
        .route("/", get(handlers::list_submissions::<R>))
        .route("/summary", get(handlers::summary::<R>))
        .route("/{id}", get(handlers::get_submission::<R>))
        .route("/{id}/approve", post(handlers::approve_submission::<R>))
        .route("/{id}/reject", post(handlers::reject_submission::<R>))
        .with_state(state)
}
