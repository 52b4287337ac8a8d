//! Anomaly accounting. Degraded input is observable through counts, never errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kinds of structural degradation the engine tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Member row without a usable `memberId`; dropped from the index.
    MalformedRecord,
    /// A `memberId` seen more than once; the later row wins in the id map.
    DuplicateMember,
    /// `parentId` present but not resolvable; the member becomes a root.
    OrphanParent,
    /// A member reached a second time during descent; that branch is cut.
    CycleDetected,
    /// A member no root reaches (its parent chain loops).
    DetachedMember,
    /// Tooltip row without a usable `id`; dropped from the tooltip map.
    MalformedTooltip,
}

impl AnomalyKind {
    pub const ALL: [AnomalyKind; 6] = [
        Self::MalformedRecord,
        Self::DuplicateMember,
        Self::OrphanParent,
        Self::CycleDetected,
        Self::DetachedMember,
        Self::MalformedTooltip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedRecord => "malformed_record",
            Self::DuplicateMember => "duplicate_member",
            Self::OrphanParent => "orphan_parent",
            Self::CycleDetected => "cycle_detected",
            Self::DetachedMember => "detached_member",
            Self::MalformedTooltip => "malformed_tooltip",
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind anomaly counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyTally {
    pub malformed_records: usize,
    pub duplicate_members: usize,
    pub orphan_parents: usize,
    pub cycles_detected: usize,
    pub detached_members: usize,
    pub malformed_tooltips: usize,
}

impl AnomalyTally {
    pub fn record(&mut self, kind: AnomalyKind) {
        *self.slot_mut(kind) += 1;
    }

    pub fn count(&self, kind: AnomalyKind) -> usize {
        match kind {
            AnomalyKind::MalformedRecord => self.malformed_records,
            AnomalyKind::DuplicateMember => self.duplicate_members,
            AnomalyKind::OrphanParent => self.orphan_parents,
            AnomalyKind::CycleDetected => self.cycles_detected,
            AnomalyKind::DetachedMember => self.detached_members,
            AnomalyKind::MalformedTooltip => self.malformed_tooltips,
        }
    }

    pub fn total(&self) -> usize {
        AnomalyKind::ALL.iter().map(|&k| self.count(k)).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &AnomalyTally) {
        for kind in AnomalyKind::ALL {
            *self.slot_mut(kind) += other.count(kind);
        }
    }

    fn slot_mut(&mut self, kind: AnomalyKind) -> &mut usize {
        match kind {
            AnomalyKind::MalformedRecord => &mut self.malformed_records,
            AnomalyKind::DuplicateMember => &mut self.duplicate_members,
            AnomalyKind::OrphanParent => &mut self.orphan_parents,
            AnomalyKind::CycleDetected => &mut self.cycles_detected,
            AnomalyKind::DetachedMember => &mut self.detached_members,
            AnomalyKind::MalformedTooltip => &mut self.malformed_tooltips,
        }
    }
}
