//! Review Error Types
//!
//! Review-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Review-specific result type alias
pub type ReviewResult<T> = Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// No submission with this id
    #[error("Submission not found")]
    NotFound(String),

    /// Caller-supplied value rejected before any mutation
    #[error("{0}")]
    InvalidArgument(String),

    /// Two seed records share an id
    #[error("Duplicate submission id: {0}")]
    DuplicateId(String),

    /// Seed data could not be read or violates the submission invariants
    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::NotFound(_) => StatusCode::NOT_FOUND,
            ReviewError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ReviewError::DuplicateId(_) => StatusCode::CONFLICT,
            ReviewError::Seed(_) | ReviewError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewError::NotFound(_) => ErrorKind::NotFound,
            ReviewError::InvalidArgument(_) => ErrorKind::BadRequest,
            ReviewError::DuplicateId(_) => ErrorKind::Conflict,
            ReviewError::Seed(_) | ReviewError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ReviewError::NotFound(_) => {
                err.with_action("The submission you're looking for doesn't exist")
            }
            ReviewError::InvalidArgument(_) => {
                err.with_action("Please provide a reason for rejecting this submission")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ReviewError::NotFound(id) => {
                tracing::debug!(submission_id = %id, "Submission not found");
            }
            ReviewError::InvalidArgument(msg) => {
                tracing::debug!(message = %msg, "Invalid review request");
            }
            ReviewError::DuplicateId(id) => {
                tracing::error!(submission_id = %id, "Duplicate submission id");
            }
            ReviewError::Seed(msg) => {
                tracing::error!(message = %msg, "Invalid seed data");
            }
            ReviewError::Internal(msg) => {
                tracing::error!(message = %msg, "Review internal error");
            }
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
