//! Roadmap generator configuration.

use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;

fn default_timeout_secs() -> u64 {
    30
}

/// Settings for roadmap generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Hard deadline for one generation call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Simulated latency of the mock generator, in milliseconds.
    #[serde(default)]
    pub mock_delay_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            mock_delay_ms: 0,
        }
    }
}

impl GeneratorConfig {
    /// The generation deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The mock generator's simulated latency.
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "generator.timeout_secs must be at least 1",
            ));
        }
        Ok(())
    }
}
