//! Property tests for the navigation and expansion reducers.

use proptest::prelude::*;

use affinet_core::{Breadcrumb, MemberId};
use affinet_session::{ExpansionAction, ExpansionState, NavigationAction, NavigationState};

fn navigation_action() -> impl Strategy<Value = NavigationAction> {
    prop_oneof![
        (
            proptest::option::of(0i64..5),
            any::<bool>(),
            prop::collection::vec(0i64..8, 0..3),
        )
            .prop_map(|(first_root, resolves, unresolved)| {
                NavigationAction::SnapshotLoaded {
                    first_root: first_root.map(MemberId),
                    selected_resolves: resolves,
                    unresolved_crumbs: unresolved.into_iter().map(MemberId).collect(),
                }
            }),
        (0i64..8).prop_map(|id| NavigationAction::SelectNode(Breadcrumb::new(id, id.to_string()))),
        (0i64..8).prop_map(|id| NavigationAction::SelectBreadcrumb(MemberId(id))),
        Just(NavigationAction::ResetToRoot),
    ]
}

fn expansion_action() -> impl Strategy<Value = ExpansionAction> {
    prop_oneof![
        (0i64..10).prop_map(|id| ExpansionAction::Toggle(MemberId(id))),
        prop::collection::vec(0i64..10, 0..5)
            .prop_map(|ids| ExpansionAction::ExpandAll(ids.into_iter().map(MemberId).collect())),
        Just(ExpansionAction::CollapseAll),
    ]
}

proptest! {
    #[test]
    fn prop_selected_root_is_last_crumb(
        actions in prop::collection::vec(navigation_action(), 0..40)
    ) {
        let mut state = NavigationState::Unselected;
        for action in actions {
            state = state.reduce(action);
            if let Some(last) = state.breadcrumb().last() {
                prop_assert_eq!(state.selected_root(), Some(last.member_id));
            }
        }
    }

    #[test]
    fn prop_reset_always_empties_breadcrumb(
        actions in prop::collection::vec(navigation_action(), 0..40)
    ) {
        let mut state = NavigationState::Unselected;
        for action in actions {
            state = state.reduce(action);
        }
        let was_rooted = state.is_rooted();
        let reset = state.reduce(NavigationAction::ResetToRoot);
        prop_assert_eq!(reset.is_rooted(), was_rooted);
        prop_assert!(reset.breadcrumb().is_empty());
        prop_assert_eq!(reset.selected_root(), reset.first_root());
    }

    #[test]
    fn prop_unselected_ignores_ui_actions(
        actions in prop::collection::vec(navigation_action(), 0..20)
    ) {
        for action in actions {
            if matches!(action, NavigationAction::SnapshotLoaded { .. }) {
                continue;
            }
            prop_assert_eq!(NavigationState::Unselected.reduce(action), NavigationState::Unselected);
        }
    }

    #[test]
    fn prop_double_toggle_is_identity(
        actions in prop::collection::vec(expansion_action(), 0..30),
        id in 0i64..10,
    ) {
        let state = actions.into_iter().fold(ExpansionState::new(), ExpansionState::reduce);
        let twice = state
            .clone()
            .reduce(ExpansionAction::Toggle(MemberId(id)))
            .reduce(ExpansionAction::Toggle(MemberId(id)));
        prop_assert_eq!(twice, state);
    }
}
