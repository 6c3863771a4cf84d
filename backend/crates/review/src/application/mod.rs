//! Application Layer
//!
//! The submission store and its review operations.

pub mod store;

// Re-exports
pub use store::SubmissionStore;
