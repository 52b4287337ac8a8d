// Single source of truth for all default values.

// --- Traversal ---
pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_MAX_NODES: usize = 500;

// --- Session ---
pub const DEFAULT_LABEL_FIELD: &str = "name";
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_024;
pub const DEFAULT_CACHE_IDLE_SECS: u64 = 600; // 10 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
