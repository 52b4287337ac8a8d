//! Derived, ephemeral views handed to the rendering layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::member::MemberId;
use super::tooltip::TooltipRecord;

/// One entry of a bounded traversal, in pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub member_id: MemberId,
    /// The member this node was reached through; `None` for the display root.
    pub parent_id: Option<MemberId>,
    /// Depth relative to the display root.
    pub level: usize,
}

/// Nested display tree. Rebuilt, never mutated, whenever the snapshot or the
/// selected root changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub member_id: MemberId,
    pub level: usize,
    pub children: Vec<TreeNode>,
    #[ts(type = "Record<string, unknown> | null")]
    pub tooltip: Option<TooltipRecord>,
}

impl TreeNode {
    /// Number of nodes in this tree, self included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Find a node by member id (pre-order).
    pub fn find(&self, member_id: MemberId) -> Option<&TreeNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.member_id == member_id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

// Unlinks children onto a heap stack so dropping a deep chain cannot
// overflow the call stack.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
