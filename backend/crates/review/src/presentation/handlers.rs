//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::SubmissionStore;
use crate::domain::repository::SubmissionRepository;
use crate::domain::services::StatusCounts;
use crate::domain::value_objects::{SubmissionId, SubmissionStatus};
use crate::error::{ReviewError, ReviewResult};
use crate::presentation::dto::{ListQuery, RejectRequest, SubmissionDto};

/// Shared state for review handlers
pub struct ReviewAppState<R>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    pub store: Arc<SubmissionStore<R>>,
}

impl<R> Clone for ReviewAppState<R>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// GET /api/submissions?status=
pub async fn list_submissions<R>(
    State(state): State<ReviewAppState<R>>,
    Query(query): Query<ListQuery>,
) -> ReviewResult<Json<Vec<SubmissionDto>>>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    let submissions = match query.status.as_deref() {
        Some(status) => {
            let status: SubmissionStatus = status.parse()?;
            state.store.list_by_status(status).await?
        }
        None => state.store.list().await?,
    };

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// GET /api/submissions/summary
pub async fn summary<R>(State(state): State<ReviewAppState<R>>) -> ReviewResult<Json<StatusCounts>>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    Ok(Json(state.store.counts().await?))
}

/// GET /api/submissions/{id}
pub async fn get_submission<R>(
    State(state): State<ReviewAppState<R>>,
    Path(id): Path<String>,
) -> ReviewResult<Json<SubmissionDto>>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    let submission = state
        .store
        .get_by_id(&SubmissionId::new(id.clone()))
        .await?
        .ok_or(ReviewError::NotFound(id))?;

    Ok(Json(submission.into()))
}

/// POST /api/submissions/{id}/approve
pub async fn approve_submission<R>(
    State(state): State<ReviewAppState<R>>,
    Path(id): Path<String>,
) -> ReviewResult<Json<SubmissionDto>>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    let submission = state.store.approve(&SubmissionId::new(id)).await?;
    Ok(Json(submission.into()))
}

/// POST /api/submissions/{id}/reject
pub async fn reject_submission<R>(
    State(state): State<ReviewAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<RejectRequest>,
) -> ReviewResult<Json<SubmissionDto>>
where
    R: SubmissionRepository + Send + Sync + 'static,
{
    let submission = state
        .store
        .reject(&SubmissionId::new(id), &req.reason)
        .await?;
    Ok(Json(submission.into()))
}
