//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `SKILLPATH`
//! prefix and nested values use `__` as the separator:
//!
//! - `SKILLPATH__STORAGE__BACKEND=file` -> `storage.backend = File`
//! - `SKILLPATH__GENERATOR__TIMEOUT_SECS=45` -> `generator.timeout_secs = 45`
//!
//! Every field has a default, so an empty environment yields a working
//! development configuration (in-memory storage, mock generator).

mod error;
mod generator;
mod storage;
pub mod telemetry;

pub use error::ConfigError;
pub use generator::GeneratorConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

fn default_log_filter() -> String {
    "skillpath=info".to_string()
}

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Session persistence backend.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Roadmap generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Default tracing filter, overridable via `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            generator: GeneratorConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment, reading a `.env` file
    /// first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable cannot be parsed into its
    /// typed field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SKILLPATH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation beyond what the types encode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.generator.validate()?;
        Ok(())
    }
}
