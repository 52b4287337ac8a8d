//! NetworkTree: everything derived from one snapshot, built once and shared.

use std::sync::Arc;

use tracing::debug;

use affinet_core::{
    AffinetResult, AnomalyTally, MemberId, MemberRecord, NetworkSnapshot, TreeNode,
};

use crate::builder::{TreeBuilder, TreeLayout};
use crate::cache::{CachedTraversal, SubtreeCache, SubtreeKey};
use crate::index::RecordIndex;
use crate::materialize::materialize;
use crate::selector::{SubtreeSelection, SubtreeSelector};
use crate::tooltips::TooltipIndex;
use crate::traversal::{bounded, TraversalBudget, TraversalResult};

/// Immutable derived state of one snapshot. `Send + Sync`; share it by `Arc`.
#[derive(Debug)]
pub struct NetworkTree {
    content_hash: Arc<str>,
    index: RecordIndex,
    tooltips: TooltipIndex,
    layout: TreeLayout,
    anomalies: AnomalyTally,
}

impl NetworkTree {
    /// Index `snapshot` and derive its roots and levels.
    pub fn new(snapshot: NetworkSnapshot) -> AffinetResult<Self> {
        let content_hash: Arc<str> = Arc::from(snapshot.content_hash()?);
        let NetworkSnapshot { records, tooltips } = snapshot;

        let index = RecordIndex::from_records(records);
        let tooltips = TooltipIndex::from_records(tooltips);
        let layout = TreeBuilder::build(&index);

        let mut anomalies = *index.anomalies();
        anomalies.merge(tooltips.anomalies());
        anomalies.merge(&layout.anomalies);

        debug!(
            content_hash = %content_hash,
            members = index.len(),
            roots = layout.roots.len(),
            anomalies = anomalies.total(),
            "network tree built"
        );

        Ok(Self {
            content_hash,
            index,
            tooltips,
            layout,
            anomalies,
        })
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn index(&self) -> &RecordIndex {
        &self.index
    }

    pub fn tooltips(&self) -> &TooltipIndex {
        &self.tooltips
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn roots(&self) -> &[MemberId] {
        &self.layout.roots
    }

    pub fn first_root(&self) -> Option<MemberId> {
        self.layout.first_root()
    }

    /// Every anomaly found in records, tooltips, and layout.
    pub fn anomalies(&self) -> &AnomalyTally {
        &self.anomalies
    }

    pub fn contains(&self, member_id: MemberId) -> bool {
        self.index.contains(member_id)
    }

    pub fn record(&self, member_id: MemberId) -> Option<&MemberRecord> {
        self.index.get(member_id)
    }

    /// Display label of `member_id` read from `field`.
    pub fn label(&self, member_id: MemberId, field: &str) -> String {
        self.record(member_id)
            .map(|record| record.label(field))
            .unwrap_or_else(|| member_id.to_string())
    }

    /// Direct children of every snapshot-wide root, in root order.
    pub fn first_level_members(&self) -> Vec<MemberId> {
        self.layout
            .roots
            .iter()
            .flat_map(|&root| self.index.child_ids(root))
            .collect()
    }

    pub fn descendants_of(&self, root: MemberId) -> Vec<MemberId> {
        SubtreeSelector::descendants_of(&self.index, root)
    }

    pub fn select(&self, root: MemberId) -> SubtreeSelection {
        SubtreeSelector::select(&self.index, root)
    }

    pub fn subtree(&self, root: MemberId, budget: TraversalBudget) -> TraversalResult {
        bounded::walk(&self.index, root, budget)
    }

    /// [`Self::subtree`] through `cache`.
    pub fn subtree_cached(
        &self,
        cache: &SubtreeCache,
        root: MemberId,
        budget: TraversalBudget,
    ) -> CachedTraversal {
        let key = SubtreeKey {
            content_hash: Arc::clone(&self.content_hash),
            root,
            budget,
        };
        cache.get_or_compute(key, || self.subtree(root, budget))
    }

    /// Nested display tree for a traversal of this snapshot.
    pub fn materialize(&self, result: &TraversalResult) -> Option<TreeNode> {
        materialize(&result.nodes, &self.tooltips)
    }

    /// Bounded walk from `root`, nested, with tooltips attached.
    pub fn display_tree(&self, root: MemberId, budget: TraversalBudget) -> Option<TreeNode> {
        self.materialize(&self.subtree(root, budget))
    }
}
