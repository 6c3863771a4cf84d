//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{admin_session::AdminSession, session_user::SessionUser};
pub use repository::SessionRepository;
