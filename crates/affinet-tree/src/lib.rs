//! # affinet-tree
//!
//! Turns a flat list of member records into a navigable referral tree.
//!
//! - [`RecordIndex`]: arena of records, id map, and per-parent child lists.
//! - [`TreeBuilder`]: snapshot-wide roots and levels.
//! - [`SubtreeSelector`]: everything below an arbitrary member (re-rooting).
//! - [`traversal`]: depth- and count-bounded pre-order walk for display.
//! - [`materialize`]: nested [`TreeNode`](affinet_core::TreeNode) from a walk.
//! - [`NetworkTree`] / [`SubtreeCache`]: per-snapshot facade and memoization.
//!
//! Every function here is pure over an immutable snapshot and terminates on
//! any input, including parent chains that loop.

pub mod builder;
pub mod cache;
pub mod index;
pub mod materialize;
pub mod network;
pub mod selector;
pub mod tooltips;
pub mod traversal;

pub use builder::{TreeBuilder, TreeLayout};
pub use cache::{CachedTraversal, SubtreeCache, SubtreeKey};
pub use index::RecordIndex;
pub use network::NetworkTree;
pub use selector::{Descendant, SubtreeSelection, SubtreeSelector};
pub use tooltips::TooltipIndex;
pub use traversal::{TraversalBudget, TraversalEngine, TraversalResult};

use affinet_core::{MemberId, MemberRecord};

/// Index a flat record list.
pub fn build_index(records: &[MemberRecord]) -> RecordIndex {
    RecordIndex::build(records)
}

/// Snapshot-wide roots and levels.
pub fn build_tree(index: &RecordIndex) -> TreeLayout {
    TreeBuilder::build(index)
}

/// Every member strictly below `root_id`, in pre-order.
pub fn descendants_of(index: &RecordIndex, root_id: MemberId) -> Vec<MemberId> {
    SubtreeSelector::descendants_of(index, root_id)
}

/// Bounded pre-order walk from `root_id`.
pub fn subtree(
    index: &RecordIndex,
    root_id: MemberId,
    max_depth: usize,
    max_nodes: usize,
) -> TraversalResult {
    traversal::bounded::walk(index, root_id, TraversalBudget::new(max_depth, max_nodes))
}
