//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Submission)
//! - Domain value objects (SubmissionId, SubmissionStatus, ReviewState)
//! - Domain services (status filters and counts)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::Submission;
pub use repository::SubmissionRepository;
pub use services::StatusCounts;
pub use value_objects::{RejectionReason, ReviewState, SubmissionId, SubmissionStatus};
