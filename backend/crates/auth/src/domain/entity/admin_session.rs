//! Admin Session Entity
//!
//! Occupant of the single session slot. No expiry: a session ends only on
//! logout, on a newer login, or on process restart.

use chrono::{DateTime, Utc};
use kernel::id::AdminSessionId;

use crate::domain::entity::session_user::SessionUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub session_id: AdminSessionId,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(user: SessionUser) -> Self {
        Self {
            session_id: AdminSessionId::new(),
            user,
            created_at: Utc::now(),
        }
    }
}
