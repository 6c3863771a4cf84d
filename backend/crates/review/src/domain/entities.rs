//! Domain Entities
//!
//! Core business entities for the review domain.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{RejectionReason, ReviewState, SubmissionId, SubmissionStatus};

/// Submission entity - a heritage item awaiting or having received review.
///
/// Everything except `review` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub title: String,
    pub location: String,
    pub description: String,
    pub user_name: String,
    pub user_id: String,
    /// External image reference, never fetched
    pub image_url: String,
    pub submitted_at: DateTime<Utc>,
    pub review: ReviewState,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        self.review.status()
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.review.rejection_reason()
    }

    /// Mark approved, dropping any earlier rejection reason
    pub fn approve(&mut self) {
        self.review = ReviewState::Approved;
    }

    pub fn reject(&mut self, reason: RejectionReason) {
        self.review = ReviewState::Rejected { reason };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> Submission {
        Submission {
            id: SubmissionId::new("1"),
            title: "Ancient Temple".to_string(),
            location: "Mysore, Karnataka".to_string(),
            description: "Carvings".to_string(),
            user_name: "Rahul Sharma".to_string(),
            user_id: "user123".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            submitted_at: Utc::now(),
            review: ReviewState::Pending,
        }
    }

    #[test]
    fn test_approve_clears_reason() {
        let mut s = submission();
        s.reject(RejectionReason::new("blurry").unwrap());
        assert_eq!(s.status(), SubmissionStatus::Rejected);
        assert_eq!(s.rejection_reason(), Some("blurry"));

        s.approve();
        assert_eq!(s.status(), SubmissionStatus::Approved);
        assert_eq!(s.rejection_reason(), None);
    }

    #[test]
    fn test_reject_overwrites_reason() {
        let mut s = submission();
        s.reject(RejectionReason::new("first").unwrap());
        s.reject(RejectionReason::new("second").unwrap());
        assert_eq!(s.rejection_reason(), Some("second"));
    }
}
