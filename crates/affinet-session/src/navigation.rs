//! NavigationController: re-rooting with a breadcrumb trail.
//!
//! Two states: nothing loaded yet (`Unselected`), or a display root chosen
//! (`Rooted`). Every transition goes through the pure [`NavigationState::reduce`].

use std::fmt;

use serde::Serialize;

use affinet_core::{Breadcrumb, MemberId, SelectionState};

/// Navigation events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// A snapshot was installed. `selected_resolves` says whether the current
    /// selected root still exists in it; `unresolved_crumbs` lists breadcrumb
    /// members it no longer contains.
    SnapshotLoaded {
        first_root: Option<MemberId>,
        selected_resolves: bool,
        unresolved_crumbs: Vec<MemberId>,
    },
    SelectNode(Breadcrumb),
    SelectBreadcrumb(MemberId),
    ResetToRoot,
}

impl NavigationAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SnapshotLoaded { .. } => "snapshot_loaded",
            Self::SelectNode(_) => "select_node",
            Self::SelectBreadcrumb(_) => "select_breadcrumb",
            Self::ResetToRoot => "reset_to_root",
        }
    }
}

impl fmt::Display for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum NavigationState {
    #[default]
    Unselected,
    #[serde(rename_all = "camelCase")]
    Rooted {
        first_root: MemberId,
        selection: SelectionState,
    },
}

impl NavigationState {
    fn rooted_at(first_root: MemberId) -> Self {
        Self::Rooted {
            first_root,
            selection: SelectionState {
                selected_root_id: first_root,
                breadcrumb: Vec::new(),
            },
        }
    }

    pub fn reduce(self, action: NavigationAction) -> Self {
        match (self, action) {
            (
                _,
                NavigationAction::SnapshotLoaded {
                    first_root: None, ..
                },
            ) => Self::Unselected,

            (
                Self::Rooted { mut selection, .. },
                NavigationAction::SnapshotLoaded {
                    first_root: Some(first_root),
                    selected_resolves: true,
                    unresolved_crumbs,
                },
            ) => {
                let selected = selection.selected_root_id;
                selection.breadcrumb.retain(|crumb| {
                    crumb.member_id == selected || !unresolved_crumbs.contains(&crumb.member_id)
                });
                Self::Rooted {
                    first_root,
                    selection,
                }
            }

            (
                _,
                NavigationAction::SnapshotLoaded {
                    first_root: Some(first_root),
                    ..
                },
            ) => Self::rooted_at(first_root),

            (Self::Unselected, _) => Self::Unselected,

            (
                Self::Rooted {
                    first_root,
                    mut selection,
                },
                NavigationAction::SelectNode(crumb),
            ) => {
                selection.selected_root_id = crumb.member_id;
                selection.breadcrumb.push(crumb);
                Self::Rooted {
                    first_root,
                    selection,
                }
            }

            (
                Self::Rooted {
                    first_root,
                    mut selection,
                },
                NavigationAction::SelectBreadcrumb(member_id),
            ) => {
                if let Some(pos) = selection
                    .breadcrumb
                    .iter()
                    .rposition(|crumb| crumb.member_id == member_id)
                {
                    selection.breadcrumb.truncate(pos + 1);
                    selection.selected_root_id = member_id;
                }
                Self::Rooted {
                    first_root,
                    selection,
                }
            }

            (Self::Rooted { first_root, .. }, NavigationAction::ResetToRoot) => {
                Self::rooted_at(first_root)
            }
        }
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        match self {
            Self::Unselected => None,
            Self::Rooted { selection, .. } => Some(selection),
        }
    }

    pub fn selected_root(&self) -> Option<MemberId> {
        self.selection().map(|s| s.selected_root_id)
    }

    pub fn first_root(&self) -> Option<MemberId> {
        match self {
            Self::Unselected => None,
            Self::Rooted { first_root, .. } => Some(*first_root),
        }
    }

    pub fn breadcrumb(&self) -> &[Breadcrumb] {
        self.selection().map_or(&[], |s| s.breadcrumb.as_slice())
    }

    pub fn is_rooted(&self) -> bool {
        matches!(self, Self::Rooted { .. })
    }
}

/// Owns a [`NavigationState`] and dispatches actions against it.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        self.state.selection()
    }

    /// Apply `action`. Returns whether the state changed.
    pub fn dispatch(&mut self, action: NavigationAction) -> bool {
        let _span = affinet_observability::navigation_span!(action).entered();
        let before = self.state.clone();
        self.state = std::mem::take(&mut self.state).reduce(action);
        before != self.state
    }

    /// Refresh after a snapshot load. Returns the previous selected root when
    /// it no longer resolves and the selection fell back to the first root.
    /// A kept selection loses the breadcrumb entries that no longer resolve.
    pub fn snapshot_loaded(
        &mut self,
        first_root: Option<MemberId>,
        resolves: impl Fn(MemberId) -> bool,
    ) -> Option<MemberId> {
        let previous = self.state.selected_root();
        let selected_resolves = previous.is_some_and(&resolves);
        let unresolved_crumbs = self
            .state
            .breadcrumb()
            .iter()
            .map(|crumb| crumb.member_id)
            .filter(|&id| !resolves(id))
            .collect();
        self.dispatch(NavigationAction::SnapshotLoaded {
            first_root,
            selected_resolves,
            unresolved_crumbs,
        });
        previous.filter(|_| !selected_resolves)
    }

    pub fn select_node(&mut self, crumb: Breadcrumb) -> bool {
        self.dispatch(NavigationAction::SelectNode(crumb))
    }

    pub fn select_breadcrumb(&mut self, member_id: MemberId) -> bool {
        self.dispatch(NavigationAction::SelectBreadcrumb(member_id))
    }

    pub fn reset_to_root(&mut self) -> bool {
        self.dispatch(NavigationAction::ResetToRoot)
    }
}
