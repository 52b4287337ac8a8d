pub mod defaults;
mod observability_config;
mod session_config;
mod traversal_config;

pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use traversal_config::TraversalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AffinetResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinetConfig {
    pub traversal: TraversalConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl AffinetConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(input: &str) -> AffinetResult<Self> {
        let config: Self = toml::from_str(input).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.label_field.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "session.label_field".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.session.cache_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "session.cache_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
