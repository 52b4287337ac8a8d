//! Property tests for affinet-tree: coverage, budgets, determinism, cycle safety.

use std::collections::HashSet;

use proptest::prelude::*;

use affinet_core::{MemberId, MemberRecord};
use affinet_tree::{build_index, build_tree, descendants_of, subtree};

const INF: usize = usize::MAX;

/// Forest of `n` members: member `i`'s parent is drawn from `0..i` or is absent,
/// so the result is acyclic. Records are emitted in a shuffled order.
fn forest_strategy(max_members: usize) -> impl Strategy<Value = Vec<MemberRecord>> {
    (1..max_members)
        .prop_flat_map(|n| {
            (0..n)
                .map(|i| {
                    if i == 0 {
                        Just(None::<i64>).boxed()
                    } else {
                        prop::option::weighted(0.85, 0..i as i64).boxed()
                    }
                })
                .collect::<Vec<_>>()
        })
        .prop_flat_map(|parents| {
            let records: Vec<MemberRecord> = parents
                .into_iter()
                .enumerate()
                .map(|(i, parent)| MemberRecord::new(i as i64, parent))
                .collect();
            Just(records).prop_shuffle()
        })
}

/// Arbitrary parent graph, cycles and dangling parents included.
fn wild_strategy(max_members: usize) -> impl Strategy<Value = Vec<MemberRecord>> {
    prop::collection::vec(
        (0..max_members as i64, prop::option::of(0..(max_members as i64 + 5))),
        0..max_members * 2,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(id, parent)| MemberRecord::new(id, parent))
            .collect()
    })
}

proptest! {
    // Roots plus all their descendants cover every member exactly once.
    #[test]
    fn roots_and_descendants_partition_acyclic_snapshots(records in forest_strategy(40)) {
        let index = build_index(&records);
        let layout = build_tree(&index);

        let mut seen = Vec::new();
        for &root in &layout.roots {
            seen.push(root);
            seen.extend(descendants_of(&index, root));
        }
        let unique: HashSet<MemberId> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len(), "a member appeared twice");
        prop_assert_eq!(unique.len(), records.len());
        prop_assert!(layout.unreached.is_empty());
        prop_assert_eq!(layout.anomalies.cycles_detected, 0);
    }

    // Unbounded subtree is exactly {root} ∪ descendants, no duplicates.
    #[test]
    fn unbounded_subtree_is_root_plus_descendants(records in wild_strategy(25), root in 0_i64..25) {
        let index = build_index(&records);
        let walk = subtree(&index, MemberId(root), INF, INF);
        let ids = walk.member_ids();

        let unique: HashSet<MemberId> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());

        if index.contains(MemberId(root)) {
            let mut expected: HashSet<MemberId> =
                descendants_of(&index, MemberId(root)).into_iter().collect();
            expected.insert(MemberId(root));
            prop_assert_eq!(unique, expected);
        } else {
            prop_assert!(ids.is_empty());
        }
    }

    // Node budget is never exceeded.
    #[test]
    fn node_budget_is_respected(records in wild_strategy(30), root in 0_i64..30, k in 0_usize..40) {
        let index = build_index(&records);
        let walk = subtree(&index, MemberId(root), INF, k);
        prop_assert!(walk.nodes.len() <= k, "got {} nodes with budget {}", walk.nodes.len(), k);
    }

    // Depth budget is never exceeded, and levels step by exactly one per edge.
    #[test]
    fn depth_budget_is_respected(records in wild_strategy(30), root in 0_i64..30, d in 0_usize..6) {
        let index = build_index(&records);
        let walk = subtree(&index, MemberId(root), d, INF);
        for node in &walk.nodes {
            prop_assert!(node.level <= d);
            match node.parent_id {
                None => prop_assert_eq!(node.level, 0),
                Some(parent) => {
                    let parent_view = walk.nodes.iter().find(|n| n.member_id == parent);
                    prop_assert!(parent_view.is_some());
                    prop_assert_eq!(parent_view.map(|p| p.level + 1), Some(node.level));
                }
            }
        }
    }

    // Same arguments, same ordered output.
    #[test]
    fn subtree_is_deterministic(
        records in wild_strategy(30),
        root in 0_i64..30,
        d in 0_usize..8,
        k in 0_usize..40,
    ) {
        let index = build_index(&records);
        prop_assert_eq!(subtree(&index, MemberId(root), d, k), subtree(&index, MemberId(root), d, k));
    }

    // A bounded walk is a prefix-closed slice of the unbounded one when only the
    // node budget binds.
    #[test]
    fn node_budget_truncates_the_unbounded_order(records in forest_strategy(30), k in 0_usize..40) {
        let index = build_index(&records);
        let full = subtree(&index, MemberId(0), INF, INF).member_ids();
        let bounded = subtree(&index, MemberId(0), INF, k).member_ids();
        prop_assert_eq!(&full[..bounded.len()], &bounded[..]);
        prop_assert_eq!(bounded.len(), k.min(full.len()));
    }

    // Building the layout terminates on any parent graph and levels are consistent.
    #[test]
    fn layout_terminates_on_arbitrary_graphs(records in wild_strategy(30)) {
        let index = build_index(&records);
        let layout = build_tree(&index);
        prop_assert_eq!(layout.level_of.len() + layout.unreached.len(), index.len());
        for root in &layout.roots {
            prop_assert_eq!(layout.level(*root), Some(0));
        }
    }

    // Levels from the layout match the levels of an unbounded walk from each
    // root, duplicated ids included.
    #[test]
    fn layout_levels_match_walk_levels(records in wild_strategy(30)) {
        let index = build_index(&records);
        let layout = build_tree(&index);
        for &root in &layout.roots {
            let walk = subtree(&index, root, INF, INF);
            prop_assert_eq!(walk.cycles_detected, 0);
            for node in &walk.nodes {
                prop_assert_eq!(layout.level(node.member_id), Some(node.level));
            }
        }
    }
}
