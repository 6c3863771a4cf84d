//! Review (Submission Moderation) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Submission entity, review state, derived views, repository trait
//! - `application/` - The [`SubmissionStore`]
//! - `infra/` - In-memory collection and seed loading
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Review Model
//! - Submissions are seeded at startup; none are created or deleted afterwards
//! - Only the review state changes, through approve and reject
//! - A rejection reason exists exactly when a submission is rejected
//! - Status views and counts are recomputed from the collection on every read

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::SubmissionStore;
pub use domain::{StatusCounts, Submission, SubmissionId, SubmissionStatus};
pub use error::{ReviewError, ReviewResult};
pub use infra::memory::InMemorySubmissionRepository;
pub use presentation::router::review_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
