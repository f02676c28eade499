//! File-based session store.
//!
//! One JSON document per session under a base directory. Survives
//! restarts; suited to single-process deployments.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::diagnosis::DiagnosisSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, StoreError};

/// JSON-file storage for diagnosis sessions.
#[derive(Debug)]
pub struct FileSessionStore {
    base_path: PathBuf,
    // Serializes the read-check-write inside save so two tasks in this
    // process cannot interleave version checks.
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Creates a store rooted at `base_path`. The directory is created
    /// on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn session_file(&self, id: &SessionId) -> PathBuf {
        self.base_path.join(format!("{id}.json"))
    }

    async fn read_session(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, StoreError> {
        let bytes = match fs::read(self.session_file(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        let session = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        Ok(Some(session))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn find(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, StoreError> {
        self.read_session(id).await
    }

    async fn save(&self, session: &mut DiagnosisSession) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let stored_version = self
            .read_session(session.id())
            .await?
            .map(|s| s.version())
            .unwrap_or(0);
        if stored_version != session.version() {
            return Err(StoreError::Conflict {
                id: *session.id(),
                expected: session.version(),
                actual: stored_version,
            });
        }

        session.bump_version();
        let json = serde_json::to_vec_pretty(session)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        fs::write(self.session_file(session.id()), json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}
