//! TreeBuilder: snapshot-wide roots and per-member levels.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use affinet_core::{AnomalyKind, AnomalyTally, MemberId};

use crate::index::RecordIndex;

/// Roots and levels of a whole snapshot.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeLayout {
    /// Members whose parent is absent or unresolved, in first-seen order.
    pub roots: Vec<MemberId>,
    /// Level of every member reachable from a root (root = 0).
    pub level_of: HashMap<MemberId, usize>,
    /// Members no root reaches, in first-seen order.
    pub unreached: Vec<MemberId>,
    pub anomalies: AnomalyTally,
}

impl TreeLayout {
    pub fn first_root(&self) -> Option<MemberId> {
        self.roots.first().copied()
    }

    pub fn level(&self, member_id: MemberId) -> Option<usize> {
        self.level_of.get(&member_id).copied()
    }

    pub fn is_root(&self, member_id: MemberId) -> bool {
        self.roots.contains(&member_id)
    }
}

/// Derives roots and levels from a [`RecordIndex`].
pub struct TreeBuilder;

impl TreeBuilder {
    /// Breadth-first descent from every root in first-seen order.
    ///
    /// Only live slots are followed (see [`RecordIndex::child_ids`]), so a
    /// duplicated member gets the level of its winning record and a root is
    /// always at level 0. A member reached a second time is not descended into
    /// again and is counted as [`AnomalyKind::CycleDetected`]; the walk is
    /// always finite.
    pub fn build(index: &RecordIndex) -> TreeLayout {
        let mut layout = TreeLayout::default();

        // Roots, decided by each id's winning record at its first-seen position.
        let mut first_seen = HashSet::with_capacity(index.len());
        let mut order = Vec::with_capacity(index.len());
        for &member_id in index.slot_ids() {
            if !first_seen.insert(member_id) {
                continue;
            }
            order.push(member_id);
            let Some(record) = index.get(member_id) else {
                continue;
            };
            match record.parent_id {
                None => layout.roots.push(member_id),
                Some(parent) if !index.contains(parent) => {
                    layout.anomalies.record(AnomalyKind::OrphanParent);
                    layout.roots.push(member_id);
                }
                Some(_) => {}
            }
        }

        let mut queue = VecDeque::new();
        for &root in &layout.roots {
            if layout.level_of.contains_key(&root) {
                layout.anomalies.record(AnomalyKind::CycleDetected);
                continue;
            }
            layout.level_of.insert(root, 0);
            queue.push_back((root, 0_usize));

            while let Some((current, level)) = queue.pop_front() {
                for child in index.child_ids(current) {
                    if layout.level_of.contains_key(&child) {
                        layout.anomalies.record(AnomalyKind::CycleDetected);
                        debug!(member_id = %child, parent = %current, "member revisited, branch cut");
                        continue;
                    }
                    layout.level_of.insert(child, level + 1);
                    queue.push_back((child, level + 1));
                }
            }
        }

        for member_id in order {
            if !layout.level_of.contains_key(&member_id) {
                layout.anomalies.record(AnomalyKind::DetachedMember);
                layout.unreached.push(member_id);
            }
        }

        debug!(
            roots = layout.roots.len(),
            reached = layout.level_of.len(),
            unreached = layout.unreached.len(),
            "tree layout built"
        );
        layout
    }
}
