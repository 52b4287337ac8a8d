//! Depth- and count-bounded pre-order walk.

use std::collections::HashSet;

use tracing::debug;

use affinet_core::{MemberId, NodeView};

use super::{TraversalBudget, TraversalResult};
use crate::index::RecordIndex;

/// Walk from `root` under `budget`.
///
/// The node counter is checked before each visit and shared by the whole
/// walk; the root takes one slot. An unknown `root` yields an empty result.
pub fn walk(index: &RecordIndex, root: MemberId, budget: TraversalBudget) -> TraversalResult {
    let mut result = TraversalResult::empty(root, budget);
    if !index.contains(root) {
        return result;
    }

    let mut visited = HashSet::new();
    let mut stack: Vec<(MemberId, Option<MemberId>, usize)> = vec![(root, None, 0)];

    while let Some((current, parent, level)) = stack.pop() {
        if visited.contains(&current) {
            result.cycles_detected += 1;
            debug!(member_id = %current, "member revisited during walk, branch cut");
            continue;
        }
        if result.nodes.len() >= budget.max_nodes {
            result.truncated_by_nodes = true;
            break;
        }

        visited.insert(current);
        result.nodes.push(NodeView {
            member_id: current,
            parent_id: parent,
            level,
        });
        result.max_depth_reached = result.max_depth_reached.max(level);

        if !index.has_children(current) {
            continue;
        }
        if level >= budget.max_depth {
            result.truncated_by_depth = true;
            continue;
        }
        // Reversed so the first child in source order is popped first.
        stack.extend(
            index
                .child_ids(current)
                .rev()
                .map(|child| (child, Some(current), level + 1)),
        );
    }

    result
}
