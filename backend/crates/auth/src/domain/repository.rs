//! Repository Traits
//!
//! Interfaces for session state. Implementation is in infrastructure layer.

use kernel::id::AdminSessionId;

use crate::domain::entity::admin_session::AdminSession;
use crate::error::AuthResult;

/// Single-slot session storage
///
/// Holds at most one [`AdminSession`]. Each method is one atomic step.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Current occupant of the slot, if any
    async fn current(&self) -> AuthResult<Option<AdminSession>>;

    /// Put a session in the slot, returning whatever it replaced
    async fn replace(&self, session: AdminSession) -> AuthResult<Option<AdminSession>>;

    /// Empty the slot, returning the previous occupant
    async fn clear(&self) -> AuthResult<Option<AdminSession>>;

    /// Empty the slot only while it still holds `session_id`
    async fn clear_if(&self, session_id: AdminSessionId) -> AuthResult<Option<AdminSession>>;
}
