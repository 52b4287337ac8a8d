//! Structured log events for snapshot and navigation lifecycle.
//!
//! Each function emits a `tracing` event with structured fields.

use affinet_core::{AnomalyTally, MemberId};

/// Log a snapshot being installed into a session.
pub fn snapshot_applied(sequence: u64, content_hash: &str, members: usize, roots: usize) {
    tracing::info!(
        event = "snapshot_applied",
        sequence = sequence,
        content_hash = %content_hash,
        members = members,
        roots = roots,
        "snapshot applied"
    );
}

/// Log a fetch response discarded because a newer one was already applied.
pub fn stale_response_discarded(sequence: u64, latest_applied: u64) {
    tracing::warn!(
        event = "stale_response_discarded",
        sequence = sequence,
        latest_applied = latest_applied,
        "stale snapshot response discarded"
    );
}

/// Log structural anomalies found while indexing a snapshot.
pub fn anomalies_detected(tally: &AnomalyTally) {
    if tally.is_clean() {
        return;
    }
    tracing::warn!(
        event = "anomalies_detected",
        malformed_records = tally.malformed_records,
        duplicate_members = tally.duplicate_members,
        orphan_parents = tally.orphan_parents,
        cycles_detected = tally.cycles_detected,
        detached_members = tally.detached_members,
        malformed_tooltips = tally.malformed_tooltips,
        "snapshot anomalies detected"
    );
}

/// Log a selection forced back to the first root after a refresh.
pub fn selection_reset(previous: MemberId, first_root: Option<MemberId>) {
    tracing::info!(
        event = "selection_reset",
        previous = %previous,
        first_root = ?first_root.map(|id| id.value()),
        "selected root no longer resolves, reset to first root"
    );
}
