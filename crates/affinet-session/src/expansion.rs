//! ExpansionState: which members are expanded in one display session.
//!
//! Ids are not checked against the current traversal; an id the traversal
//! does not surface is simply inert.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use affinet_core::MemberId;
use affinet_tree::NetworkTree;

/// UI events that change expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionAction {
    Toggle(MemberId),
    ExpandAll(Vec<MemberId>),
    CollapseAll,
}

/// Set of expanded member ids, serialized in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<MemberId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expanded(ids: impl IntoIterator<Item = MemberId>) -> Self {
        Self {
            expanded: ids.into_iter().collect(),
        }
    }

    /// Default for the first loaded snapshot: the direct children of every
    /// snapshot-wide root.
    pub fn initial(tree: &NetworkTree) -> Self {
        Self::with_expanded(tree.first_level_members())
    }

    /// Pure reducer form.
    pub fn reduce(mut self, action: ExpansionAction) -> Self {
        self.apply(action);
        self
    }

    pub fn apply(&mut self, action: ExpansionAction) {
        match action {
            ExpansionAction::Toggle(id) => {
                self.toggle(id);
            }
            ExpansionAction::ExpandAll(ids) => self.expand_all(ids),
            ExpansionAction::CollapseAll => self.collapse_all(),
        }
    }

    /// Flip membership of `id`. Returns whether it is now expanded.
    pub fn toggle(&mut self, id: MemberId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn expand_all(&mut self, ids: impl IntoIterator<Item = MemberId>) {
        self.expanded.extend(ids);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn is_expanded(&self, id: MemberId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.expanded.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
