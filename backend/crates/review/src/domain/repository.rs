//! Repository Traits
//!
//! Interfaces for submission storage. Implementation is in infrastructure layer.

use crate::domain::entities::Submission;
use crate::domain::value_objects::{ReviewState, SubmissionId};
use crate::error::ReviewResult;

/// Submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Every submission, in insertion order
    async fn list(&self) -> ReviewResult<Vec<Submission>>;

    async fn find_by_id(&self, id: &SubmissionId) -> ReviewResult<Option<Submission>>;

    /// Set the review state of one submission atomically.
    ///
    /// Returns the updated submission, or `None` (and changes nothing) if
    /// the id is unknown.
    async fn update_review(
        &self,
        id: &SubmissionId,
        review: ReviewState,
    ) -> ReviewResult<Option<Submission>>;
}
