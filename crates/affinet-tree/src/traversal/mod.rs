//! Budgeted traversal for display.
//!
//! The walk is pre-order depth-first. Both budgets are global: a node deeper
//! than `max_depth` is never visited, and once `max_nodes` entries exist the
//! walk stops, so an early deep branch can starve its later siblings.

pub mod bounded;

use serde::{Deserialize, Serialize};

use affinet_core::config::TraversalConfig;
use affinet_core::constants::UNBOUNDED;
use affinet_core::{MemberId, NodeView};

use crate::index::RecordIndex;
use crate::selector::SubtreeSelector;

/// Paired depth and node-count limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalBudget {
    /// Deepest level visited, relative to the walk's root.
    pub max_depth: usize,
    /// Total entries produced, root included.
    pub max_nodes: usize,
}

impl TraversalBudget {
    pub fn new(max_depth: usize, max_nodes: usize) -> Self {
        Self {
            max_depth,
            max_nodes,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(UNBOUNDED, UNBOUNDED)
    }
}

impl Default for TraversalBudget {
    fn default() -> Self {
        Self::from(&TraversalConfig::default())
    }
}

impl From<&TraversalConfig> for TraversalBudget {
    fn from(config: &TraversalConfig) -> Self {
        Self::new(config.max_depth, config.max_nodes)
    }
}

/// Ordered output of a bounded walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalResult {
    pub root_id: MemberId,
    pub budget: TraversalBudget,
    /// Pre-order entries; the only data the renderer consumes.
    pub nodes: Vec<NodeView>,
    pub max_depth_reached: usize,
    /// Some member had children below `max_depth`.
    pub truncated_by_depth: bool,
    /// The walk stopped with members still pending.
    pub truncated_by_nodes: bool,
    /// Members reached again and not re-entered.
    pub cycles_detected: usize,
}

impl TraversalResult {
    pub(crate) fn empty(root_id: MemberId, budget: TraversalBudget) -> Self {
        Self {
            root_id,
            budget,
            nodes: Vec::new(),
            max_depth_reached: 0,
            truncated_by_depth: false,
            truncated_by_nodes: false,
            cycles_detected: 0,
        }
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.nodes.iter().map(|n| n.member_id).collect()
    }

    pub fn contains(&self, member_id: MemberId) -> bool {
        self.nodes.iter().any(|n| n.member_id == member_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated_by_depth || self.truncated_by_nodes
    }
}

/// Traversal engine bound to one budget.
pub struct TraversalEngine {
    budget: TraversalBudget,
}

impl TraversalEngine {
    pub fn new(budget: TraversalBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> TraversalBudget {
        self.budget
    }

    /// Bounded pre-order walk from `root`.
    pub fn subtree(&self, index: &RecordIndex, root: MemberId) -> TraversalResult {
        bounded::walk(index, root, self.budget)
    }

    /// Unbounded descendant set of `root`.
    pub fn descendants_of(&self, index: &RecordIndex, root: MemberId) -> Vec<MemberId> {
        SubtreeSelector::descendants_of(index, root)
    }
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new(TraversalBudget::default())
    }
}
