//! Session store adapters.

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::SessionStore;

/// Builds the session store named by configuration.
pub fn from_config(config: &StorageConfig) -> Arc<dyn SessionStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemorySessionStore::new()),
        StorageBackend::File => Arc::new(FileSessionStore::new(&config.data_dir)),
    }
}
