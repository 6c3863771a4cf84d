//! Submission Store
//!
//! Reads and review decisions over the submission collection. Every
//! decision reports its outcome through the notifier.

use std::sync::Arc;

use kernel::notify::{Notification, SharedNotifier};

use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::services::{StatusCounts, filter_by_status};
use crate::domain::value_objects::{RejectionReason, ReviewState, SubmissionId, SubmissionStatus};
use crate::error::{ReviewError, ReviewResult};

pub struct SubmissionStore<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
    notifier: SharedNotifier,
}

impl<R> SubmissionStore<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: R, notifier: SharedNotifier) -> Self {
        Self {
            repo: Arc::new(repo),
            notifier,
        }
    }

    /// Full collection, insertion order
    pub async fn list(&self) -> ReviewResult<Vec<Submission>> {
        self.repo.list().await
    }

    pub async fn list_by_status(&self, status: SubmissionStatus) -> ReviewResult<Vec<Submission>> {
        Ok(filter_by_status(&self.repo.list().await?, status))
    }

    pub async fn pending_submissions(&self) -> ReviewResult<Vec<Submission>> {
        self.list_by_status(SubmissionStatus::Pending).await
    }

    pub async fn approved_submissions(&self) -> ReviewResult<Vec<Submission>> {
        self.list_by_status(SubmissionStatus::Approved).await
    }

    pub async fn rejected_submissions(&self) -> ReviewResult<Vec<Submission>> {
        self.list_by_status(SubmissionStatus::Rejected).await
    }

    pub async fn counts(&self) -> ReviewResult<StatusCounts> {
        Ok(StatusCounts::tally(&self.repo.list().await?))
    }

    /// `Ok(None)` for an unknown id
    pub async fn get_by_id(&self, id: &SubmissionId) -> ReviewResult<Option<Submission>> {
        self.repo.find_by_id(id).await
    }

    /// Approve from any status. Approving twice is the same as once.
    pub async fn approve(&self, id: &SubmissionId) -> ReviewResult<Submission> {
        let submission = self
            .repo
            .update_review(id, ReviewState::Approved)
            .await?
            .ok_or_else(|| self.not_found(id))?;

        tracing::info!(submission_id = %id, "Submission approved");
        self.notifier.notify(Notification::info(
            "Submission Approved",
            "The content has been approved and will be published",
        ));
        Ok(submission)
    }

    /// Reject from any status, replacing any earlier reason.
    ///
    /// A blank reason fails before the id is looked up.
    pub async fn reject(&self, id: &SubmissionId, reason: &str) -> ReviewResult<Submission> {
        let Some(reason) = RejectionReason::new(reason) else {
            self.notifier.notify(Notification::error(
                "Rejection Failed",
                "Please provide a reason for rejecting this submission",
            ));
            return Err(ReviewError::InvalidArgument(
                "Rejection reason must not be empty".to_string(),
            ));
        };

        let submission = self
            .repo
            .update_review(id, ReviewState::Rejected { reason })
            .await?
            .ok_or_else(|| self.not_found(id))?;

        tracing::info!(submission_id = %id, "Submission rejected");
        self.notifier.notify(Notification::info(
            "Submission Rejected",
            "The content has been rejected",
        ));
        Ok(submission)
    }

    fn not_found(&self, id: &SubmissionId) -> ReviewError {
        self.notifier.notify(Notification::error(
            "Submission not found",
            "The submission you're looking for doesn't exist",
        ));
        ReviewError::NotFound(id.to_string())
    }
}
