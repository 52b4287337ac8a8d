//! SubtreeSelector: the full descendant set of an arbitrary member.
//!
//! Depth is always measured from the chosen root, never taken from the
//! snapshot-wide levels of [`crate::TreeBuilder`].

use std::collections::HashSet;

use serde::Serialize;

use affinet_core::MemberId;

use crate::index::RecordIndex;

/// A member below the selected root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descendant {
    pub member_id: MemberId,
    /// Depth relative to the selected root (direct children = 1).
    pub depth: usize,
}

/// Result of [`SubtreeSelector::select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtreeSelection {
    pub root: MemberId,
    /// Pre-order, children in source order. Excludes the root.
    pub descendants: Vec<Descendant>,
    /// Members reached again through a parent cycle and not re-entered.
    pub cycles_detected: usize,
}

impl SubtreeSelection {
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.descendants.iter().map(|d| d.member_id).collect()
    }

    pub fn max_depth(&self) -> usize {
        self.descendants.iter().map(|d| d.depth).max().unwrap_or(0)
    }
}

pub struct SubtreeSelector;

impl SubtreeSelector {
    /// Every member strictly below `root`, in pre-order.
    pub fn descendants_of(index: &RecordIndex, root: MemberId) -> Vec<MemberId> {
        Self::select(index, root).member_ids()
    }

    /// Descendants of `root` with their depth relative to it.
    ///
    /// An unknown `root` selects nothing.
    pub fn select(index: &RecordIndex, root: MemberId) -> SubtreeSelection {
        let mut selection = SubtreeSelection {
            root,
            descendants: Vec::new(),
            cycles_detected: 0,
        };
        if !index.contains(root) {
            return selection;
        }

        let mut visited = HashSet::new();
        visited.insert(root);

        let mut stack: Vec<(MemberId, usize)> =
            index.child_ids(root).rev().map(|child| (child, 1)).collect();

        while let Some((current, depth)) = stack.pop() {
            if !visited.insert(current) {
                selection.cycles_detected += 1;
                continue;
            }
            selection.descendants.push(Descendant {
                member_id: current,
                depth,
            });
            stack.extend(index.child_ids(current).rev().map(|child| (child, depth + 1)));
        }

        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinet_core::MemberRecord;

    #[test]
    fn depth_is_relative_to_selected_root() {
        let index = RecordIndex::build(&[
            MemberRecord::new(1, None),
            MemberRecord::new(2, Some(1)),
            MemberRecord::new(3, Some(2)),
            MemberRecord::new(4, Some(3)),
        ]);
        let selection = SubtreeSelector::select(&index, MemberId(2));
        assert_eq!(
            selection.descendants,
            vec![
                Descendant { member_id: MemberId(3), depth: 1 },
                Descendant { member_id: MemberId(4), depth: 2 },
            ]
        );
        assert_eq!(selection.max_depth(), 2);
    }

    #[test]
    fn two_cycle_terminates() {
        let index = RecordIndex::build(&[MemberRecord::new(5, Some(9)), MemberRecord::new(9, Some(5))]);
        let selection = SubtreeSelector::select(&index, MemberId(5));
        assert_eq!(selection.member_ids(), vec![MemberId(9)]);
        assert_eq!(selection.cycles_detected, 1);
    }

    #[test]
    fn unknown_root_selects_nothing() {
        let index = RecordIndex::build(&[MemberRecord::new(1, None)]);
        assert!(SubtreeSelector::descendants_of(&index, MemberId(42)).is_empty());
    }
}
