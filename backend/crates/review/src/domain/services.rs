//! Domain Services
//!
//! Derived views over the submission collection. Always computed from the
//! current collection; nothing here is cached.

use serde::Serialize;

use crate::domain::entities::Submission;
use crate::domain::value_objects::SubmissionStatus;

/// Submissions with `status`, in collection order
pub fn filter_by_status(submissions: &[Submission], status: SubmissionStatus) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| s.status() == status)
        .cloned()
        .collect()
}

/// Per-status counts for the dashboard summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally(submissions: &[Submission]) -> Self {
        submissions
            .iter()
            .fold(Self::default(), |mut counts, s| {
                match s.status() {
                    SubmissionStatus::Pending => counts.pending += 1,
                    SubmissionStatus::Approved => counts.approved += 1,
                    SubmissionStatus::Rejected => counts.rejected += 1,
                }
                counts.total += 1;
                counts
            })
    }
}
