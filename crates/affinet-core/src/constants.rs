/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by the tracing setup for filter directives.
pub const LOG_ENV_VAR: &str = "AFFINET_LOG";

// Wire keys of the snapshot document.
pub const SNAPSHOT_TREE_KEY: &str = "tree";
pub const SNAPSHOT_TOOLTIP_KEY: &str = "tooltip";
pub const MEMBER_ID_KEY: &str = "memberId";
pub const PARENT_ID_KEY: &str = "parentId";
pub const TOOLTIP_ID_KEY: &str = "id";

/// Budget value meaning "no limit" for either traversal dimension.
pub const UNBOUNDED: usize = usize::MAX;
