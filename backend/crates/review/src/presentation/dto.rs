//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Submission;
use crate::domain::value_objects::SubmissionStatus;

// ============================================================================
// Submissions
// ============================================================================

/// Submission as rendered by the review panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub user_name: String,
    pub user_id: String,
    pub image_url: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub badge_variant: &'static str,
    /// Approve/reject actions shown
    pub actionable: bool,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        let status = submission.status();
        let rejection_reason = submission.rejection_reason().map(str::to_string);
        Self {
            id: submission.id.to_string(),
            title: submission.title,
            location: submission.location,
            description: submission.description,
            user_name: submission.user_name,
            user_id: submission.user_id,
            image_url: submission.image_url,
            submitted_at: submission.submitted_at,
            status,
            rejection_reason,
            badge_variant: status.badge_variant(),
            actionable: status.is_actionable(),
        }
    }
}

/// `?status=` filter, parsed by the handler so bad values get a JSON 400
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

// ============================================================================
// Reject
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub reason: String,
}
