//! In-Memory Session Repository
//!
//! Process-lifetime storage for the single session slot. Nothing survives a
//! restart.

use std::sync::Arc;

use kernel::id::AdminSessionId;
use tokio::sync::RwLock;

use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    slot: Arc<RwLock<Option<AdminSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn current(&self) -> AuthResult<Option<AdminSession>> {
        Ok(self.slot.read().await.clone())
    }

    async fn replace(&self, session: AdminSession) -> AuthResult<Option<AdminSession>> {
        Ok(self.slot.write().await.replace(session))
    }

    async fn clear(&self) -> AuthResult<Option<AdminSession>> {
        Ok(self.slot.write().await.take())
    }

    async fn clear_if(&self, session_id: AdminSessionId) -> AuthResult<Option<AdminSession>> {
        let mut slot = self.slot.write().await;
        if slot.as_ref().is_some_and(|s| s.session_id == session_id) {
            Ok(slot.take())
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session_user::SessionUser;

    #[tokio::test]
    async fn test_slot_holds_one_session() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.current().await.unwrap().is_none());

        let first = AdminSession::new(SessionUser::admin("admin", "admin123"));
        let second = AdminSession::new(SessionUser::admin("admin", "admin123"));

        assert!(repo.replace(first.clone()).await.unwrap().is_none());
        let replaced = repo.replace(second.clone()).await.unwrap();
        assert_eq!(replaced, Some(first));
        assert_eq!(repo.current().await.unwrap(), Some(second.clone()));

        assert_eq!(repo.clear().await.unwrap(), Some(second));
        assert!(repo.clear().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_if_only_matches_occupant() {
        let repo = InMemorySessionRepository::new();
        let session = AdminSession::new(SessionUser::admin("admin", "admin123"));
        repo.replace(session.clone()).await.unwrap();

        let stranger = AdminSessionId::new();
        assert!(repo.clear_if(stranger).await.unwrap().is_none());
        assert_eq!(repo.current().await.unwrap(), Some(session.clone()));

        assert_eq!(
            repo.clear_if(session.session_id).await.unwrap(),
            Some(session)
        );
        assert!(repo.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let repo = InMemorySessionRepository::new();
        let clone = repo.clone();
        repo.replace(AdminSession::new(SessionUser::admin("admin", "admin123")))
            .await
            .unwrap();
        assert!(clone.current().await.unwrap().is_some());
    }
}
