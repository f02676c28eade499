//! Session storage configuration.

use serde::Deserialize;
use std::path::PathBuf;

use super::ConfigError;

/// Which session store backs the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map; sessions vanish on restart.
    Memory,
    /// One JSON file per session under `data_dir`.
    File,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/sessions")
}

/// Settings for session persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_backend")]
    pub backend: StorageBackend,

    /// Base directory for the file backend. Ignored by `memory`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Self::default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    fn default_backend() -> StorageBackend {
        StorageBackend::Memory
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::validation(
                "storage.data_dir must be set for the file backend",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_backend_requires_a_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
