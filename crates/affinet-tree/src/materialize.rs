//! Nested display tree from a pre-order traversal.

use std::collections::HashMap;

use tracing::debug;

use affinet_core::{MemberId, NodeView, TreeNode};

use crate::tooltips::TooltipIndex;

/// Assemble a [`TreeNode`] from pre-order `nodes`, attaching tooltips by id.
///
/// The first entry is the root. Entries whose parent does not precede them
/// are dropped. Built bottom-up without recursion, so deep chains are safe.
pub fn materialize(nodes: &[NodeView], tooltips: &TooltipIndex) -> Option<TreeNode> {
    if nodes.is_empty() {
        return None;
    }

    let position: HashMap<MemberId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.member_id, i))
        .collect();

    // Children collected per position, in reverse pre-order.
    let mut pending: Vec<Vec<TreeNode>> = (0..nodes.len()).map(|_| Vec::new()).collect();
    let mut root = None;

    for (i, node) in nodes.iter().enumerate().rev() {
        let mut children = std::mem::take(&mut pending[i]);
        children.reverse();
        let built = TreeNode {
            member_id: node.member_id,
            level: node.level,
            children,
            tooltip: tooltips.get(node.member_id).cloned(),
        };

        if i == 0 {
            root = Some(built);
            continue;
        }
        match node.parent_id.and_then(|p| position.get(&p).copied()) {
            Some(parent_pos) if parent_pos < i => pending[parent_pos].push(built),
            _ => debug!(member_id = %node.member_id, "entry without preceding parent dropped"),
        }
    }

    root
}
