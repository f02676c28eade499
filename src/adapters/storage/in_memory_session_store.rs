//! In-memory session store.
//!
//! The default backend for development and tests. Sessions live in a
//! process-local map and disappear on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::diagnosis::DiagnosisSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, StoreError};

/// HashMap-backed store with version-checked writes.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, DiagnosisSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, StoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save(&self, session: &mut DiagnosisSession) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;

        let stored_version = sessions.get(session.id()).map(|s| s.version()).unwrap_or(0);
        if stored_version != session.version() {
            return Err(StoreError::Conflict {
                id: *session.id(),
                expected: session.version(),
                actual: stored_version,
            });
        }

        session.bump_version();
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }
}
