use serde::{Deserialize, Serialize};

use super::defaults;

/// Display session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Member attribute used as the breadcrumb label.
    pub label_field: String,
    /// Maximum memoized traversal results shared across sessions.
    pub cache_capacity: u64,
    /// Idle time after which a memoized traversal is evicted (seconds).
    pub cache_idle_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            label_field: defaults::DEFAULT_LABEL_FIELD.to_string(),
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            cache_idle_secs: defaults::DEFAULT_CACHE_IDLE_SECS,
        }
    }
}
