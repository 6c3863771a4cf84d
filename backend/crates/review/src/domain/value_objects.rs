//! Domain Value Objects
//!
//! Immutable value types for the review domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Opaque submission identifier, assigned at creation and never reassigned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// Badge style the panel renders next to the status
    pub const fn badge_variant(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "outline",
            SubmissionStatus::Approved => "success",
            SubmissionStatus::Rejected => "destructive",
        }
    }

    /// Whether the panel offers approve/reject actions
    pub const fn is_actionable(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(ReviewError::InvalidArgument(format!(
                "Unknown submission status: {other}"
            ))),
        }
    }
}

/// Non-blank rejection reason.
///
/// Blankness is judged after trimming, but the text is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionReason(String);

impl RejectionReason {
    pub fn new(reason: impl Into<String>) -> Option<Self> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            None
        } else {
            Some(Self(reason))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Review outcome. A reason exists exactly when the submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReviewState {
    #[default]
    Pending,
    Approved,
    Rejected { reason: RejectionReason },
}

impl ReviewState {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            ReviewState::Pending => SubmissionStatus::Pending,
            ReviewState::Approved => SubmissionStatus::Approved,
            ReviewState::Rejected { .. } => SubmissionStatus::Rejected,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            ReviewState::Rejected { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}
