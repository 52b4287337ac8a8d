//! Span definitions per operation: snapshot application, traversal, navigation.

/// Create a snapshot application span.
#[macro_export]
macro_rules! snapshot_span {
    ($sequence:expr, $record_count:expr) => {
        tracing::info_span!(
            "affinet.snapshot",
            sequence = $sequence,
            record_count = $record_count
        )
    };
}

/// Create a bounded traversal span.
#[macro_export]
macro_rules! traversal_span {
    ($root:expr, $max_depth:expr, $max_nodes:expr) => {
        tracing::debug_span!(
            "affinet.traversal",
            root = %$root,
            max_depth = $max_depth,
            max_nodes = $max_nodes
        )
    };
}

/// Create a navigation span.
#[macro_export]
macro_rules! navigation_span {
    ($action:expr) => {
        tracing::debug_span!("affinet.navigation", action = %$action)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SNAPSHOT: &str = "affinet.snapshot";
    pub const TRAVERSAL: &str = "affinet.traversal";
    pub const NAVIGATION: &str = "affinet.navigation";
}
