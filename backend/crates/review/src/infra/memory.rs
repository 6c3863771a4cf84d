//! In-Memory Submission Repository
//!
//! Owns the submission collection for the life of the process.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::{ReviewState, SubmissionId};
use crate::error::ReviewResult;
use crate::infra::seed::{ensure_unique_ids, reference_seed};

#[derive(Clone)]
pub struct InMemorySubmissionRepository {
    submissions: Arc<RwLock<Vec<Submission>>>,
}

impl InMemorySubmissionRepository {
    /// Repository over `seed`, which must not repeat an id
    pub fn new(seed: Vec<Submission>) -> ReviewResult<Self> {
        ensure_unique_ids(&seed)?;
        Ok(Self {
            submissions: Arc::new(RwLock::new(seed)),
        })
    }

    /// Repository over the built-in reference submissions
    pub fn with_reference_seed() -> ReviewResult<Self> {
        Self::new(reference_seed()?)
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    async fn list(&self) -> ReviewResult<Vec<Submission>> {
        Ok(self.submissions.read().await.clone())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> ReviewResult<Option<Submission>> {
        Ok(self
            .submissions
            .read()
            .await
            .iter()
            .find(|s| &s.id == id)
            .cloned())
    }

    async fn update_review(
        &self,
        id: &SubmissionId,
        review: ReviewState,
    ) -> ReviewResult<Option<Submission>> {
        let mut submissions = self.submissions.write().await;
        Ok(submissions.iter_mut().find(|s| &s.id == id).map(|s| {
            s.review = review;
            s.clone()
        }))
    }
}
