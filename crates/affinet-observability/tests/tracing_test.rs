//! Subscriber installation and lifecycle events.
//!
//! One test per binary: the global subscriber can only be set once.

use affinet_core::config::ObservabilityConfig;
use affinet_core::{AnomalyKind, AnomalyTally, MemberId};
use affinet_observability::init_from_config;
use affinet_observability::tracing_setup::events;

#[test]
fn config_init_installs_once_and_events_emit() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json_output: true,
    };
    assert!(init_from_config(&config));
    assert!(!init_from_config(&ObservabilityConfig::default()));

    let mut tally = AnomalyTally::default();
    tally.record(AnomalyKind::OrphanParent);

    let _guard = affinet_observability::snapshot_span!(1_u64, 4_usize).entered();

    events::snapshot_applied(1, "abc", 4, 1);
    events::anomalies_detected(&tally);
    events::stale_response_discarded(1, 2);
    events::selection_reset(MemberId(7), Some(MemberId(1)));
}
