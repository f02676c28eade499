//! Session persistence contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::diagnosis::DiagnosisSession;
use crate::domain::foundation::SessionId;

/// Failures surfaced by session stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Session '{0}' not found")]
    NotFound(SessionId),

    /// Version-checked write lost the race against a concurrent save.
    #[error("Write conflict on session '{id}': expected version {expected}, found {actual}")]
    Conflict {
        id: SessionId,
        expected: u64,
        actual: u64,
    },

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Keyed persistence for diagnosis sessions with optimistic locking.
///
/// `save` must compare the incoming session's version against the
/// stored revision: a mismatch means another writer got there first and
/// the call fails with [`StoreError::Conflict`] without writing. On a
/// successful write the store bumps the session's version in place, so
/// a handler can save the same instance more than once.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Looks up a session by id. `Ok(None)` when the id was never saved.
    async fn find(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, StoreError>;

    /// Persists the session, enforcing the version check described on
    /// the trait.
    async fn save(&self, session: &mut DiagnosisSession) -> Result<(), StoreError>;

    /// Like [`SessionStore::find`], but an absent session is an error.
    async fn load(&self, id: &SessionId) -> Result<DiagnosisSession, StoreError> {
        self.find(id).await?.ok_or(StoreError::NotFound(*id))
    }
}
