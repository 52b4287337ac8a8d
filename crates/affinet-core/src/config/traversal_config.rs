use serde::{Deserialize, Serialize};

use super::defaults;

/// Default display budget for bounded traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Deepest level (relative to the display root) that is materialized.
    pub max_depth: usize,
    /// Total nodes materialized per traversal, root included.
    pub max_nodes: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            max_nodes: defaults::DEFAULT_MAX_NODES,
        }
    }
}
