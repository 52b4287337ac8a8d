//! # affinet-observability
//!
//! Structured tracing with span definitions, snapshot/navigation lifecycle
//! events, and lock-free engine counters.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, TreeMetrics};
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
