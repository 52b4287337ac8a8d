//! DisplaySession: one dashboard's view of the referral network.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use affinet_core::{
    AffinetConfig, AffinetResult, Breadcrumb, MemberId, NetworkSnapshot, SelectionState,
    SnapshotVersion, TreeNode,
};
use affinet_observability::tracing_setup::events;
use affinet_observability::TreeMetrics;
use affinet_tree::{NetworkTree, SubtreeCache, TraversalBudget, TraversalResult};

use crate::expansion::ExpansionState;
use crate::fetch::{ApplyOutcome, FetchSequencer, FetchTicket};
use crate::navigation::{NavigationController, NavigationState};

/// The snapshot a session currently displays.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub version: SnapshotVersion,
    pub tree: Arc<NetworkTree>,
    pub applied_at: DateTime<Utc>,
}

/// Per-dashboard state: current snapshot, navigation, expansion and budget.
///
/// Traversals go through a [`SubtreeCache`] that may be shared with other
/// sessions; entries are keyed by snapshot content, so sharing is safe.
pub struct DisplaySession {
    session_id: String,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
    label_field: String,
    budget: TraversalBudget,
    sequencer: FetchSequencer,
    current: Option<LoadedSnapshot>,
    navigation: NavigationController,
    expansion: ExpansionState,
    cache: SubtreeCache,
    metrics: Arc<TreeMetrics>,
}

impl DisplaySession {
    /// Session with its own cache and counters.
    pub fn new(session_id: impl Into<String>, config: &AffinetConfig) -> Self {
        Self::with_shared(
            session_id,
            config,
            SubtreeCache::from_config(&config.session),
            Arc::new(TreeMetrics::new()),
        )
    }

    pub fn with_shared(
        session_id: impl Into<String>,
        config: &AffinetConfig,
        cache: SubtreeCache,
        metrics: Arc<TreeMetrics>,
    ) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            created_at: now,
            last_activity: now,
            label_field: config.session.label_field.clone(),
            budget: TraversalBudget::from(&config.traversal),
            sequencer: FetchSequencer::new(),
            current: None,
            navigation: NavigationController::new(),
            expansion: ExpansionState::new(),
            cache,
            metrics,
        }
    }

    /// Start a snapshot request. Hand the ticket back with its response.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.touch();
        self.sequencer.begin()
    }

    /// Install `snapshot` unless a response to a newer request is already
    /// displayed.
    pub fn apply_snapshot(
        &mut self,
        ticket: FetchTicket,
        snapshot: NetworkSnapshot,
    ) -> AffinetResult<ApplyOutcome> {
        if let Some(stale) = self.discard_if_stale(ticket) {
            return Ok(stale);
        }

        let _span =
            affinet_observability::snapshot_span!(ticket.sequence(), snapshot.records.len())
                .entered();

        let tree = Arc::new(NetworkTree::new(snapshot)?);
        self.sequencer.commit(ticket);

        let version = SnapshotVersion {
            sequence: ticket.sequence(),
            content_hash: tree.content_hash().to_string(),
        };
        events::snapshot_applied(
            version.sequence,
            &version.content_hash,
            tree.index().len(),
            tree.roots().len(),
        );
        events::anomalies_detected(tree.anomalies());
        self.metrics.record_snapshot_applied(tree.anomalies());

        if let Some(previous) = self
            .navigation
            .snapshot_loaded(tree.first_root(), |id| tree.contains(id))
        {
            events::selection_reset(previous, tree.first_root());
        }

        let first_load = self.current.is_none();
        if first_load {
            self.expansion = ExpansionState::initial(&tree);
        }

        self.current = Some(LoadedSnapshot {
            version: version.clone(),
            tree,
            applied_at: Utc::now(),
        });
        self.touch();
        Ok(ApplyOutcome::Applied(version))
    }

    /// Parse a response body and apply it. Stale responses are not parsed.
    pub fn apply_json(&mut self, ticket: FetchTicket, body: &str) -> AffinetResult<ApplyOutcome> {
        if let Some(stale) = self.discard_if_stale(ticket) {
            return Ok(stale);
        }
        let snapshot = NetworkSnapshot::from_json(body)?;
        self.apply_snapshot(ticket, snapshot)
    }

    fn discard_if_stale(&self, ticket: FetchTicket) -> Option<ApplyOutcome> {
        let latest_applied = self.sequencer.superseded_by(ticket)?;
        events::stale_response_discarded(ticket.sequence(), latest_applied.sequence());
        self.metrics.record_stale_discarded();
        Some(ApplyOutcome::Stale {
            ticket,
            latest_applied,
        })
    }

    /// Re-root the display at `member_id`. No-op for ids outside the
    /// current snapshot.
    pub fn select_node(&mut self, member_id: MemberId) -> bool {
        let Some(tree) = self.tree() else {
            return false;
        };
        if !tree.contains(member_id) {
            debug!(member_id = %member_id, "select_node ignored, member not in snapshot");
            return false;
        }
        let crumb = Breadcrumb::new(member_id, tree.label(member_id, &self.label_field));
        self.touch();
        self.navigation.select_node(crumb)
    }

    /// Jump back to a breadcrumb entry. No-op for ids outside the current
    /// snapshot.
    pub fn select_breadcrumb(&mut self, member_id: MemberId) -> bool {
        if !self.tree().is_some_and(|tree| tree.contains(member_id)) {
            return false;
        }
        self.touch();
        self.navigation.select_breadcrumb(member_id)
    }

    pub fn reset_to_root(&mut self) -> bool {
        self.touch();
        self.navigation.reset_to_root()
    }

    pub fn toggle(&mut self, member_id: MemberId) -> bool {
        self.touch();
        self.expansion.toggle(member_id)
    }

    pub fn expand_all(&mut self, ids: impl IntoIterator<Item = MemberId>) {
        self.touch();
        self.expansion.expand_all(ids);
    }

    /// Expand every member of the current bounded traversal.
    pub fn expand_visible(&mut self) {
        if let Some(visible) = self.visible_nodes() {
            self.expand_all(visible.member_ids());
        }
    }

    pub fn collapse_all(&mut self) {
        self.touch();
        self.expansion.collapse_all();
    }

    pub fn set_budget(&mut self, budget: TraversalBudget) {
        self.touch();
        self.budget = budget;
    }

    /// Bounded traversal from the selected root, cached per snapshot.
    pub fn visible_nodes(&self) -> Option<Arc<TraversalResult>> {
        let tree = self.tree()?;
        let root = self.navigation.state().selected_root()?;

        let _span = affinet_observability::traversal_span!(
            root,
            self.budget.max_depth,
            self.budget.max_nodes
        )
        .entered();

        let cached = tree.subtree_cached(&self.cache, root, self.budget);
        if cached.hit {
            self.metrics.record_cache_hit();
        } else {
            self.metrics.record_cache_miss();
        }
        Some(cached.result)
    }

    /// Nested view of [`Self::visible_nodes`] with tooltips attached.
    pub fn display_tree(&self) -> Option<TreeNode> {
        let visible = self.visible_nodes()?;
        self.tree()?.materialize(&visible)
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        self.navigation.selection()
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigation.state()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, member_id: MemberId) -> bool {
        self.expansion.is_expanded(member_id)
    }

    pub fn snapshot(&self) -> Option<&LoadedSnapshot> {
        self.current.as_ref()
    }

    pub fn tree(&self) -> Option<&Arc<NetworkTree>> {
        self.current.as_ref().map(|loaded| &loaded.tree)
    }

    pub fn budget(&self) -> TraversalBudget {
        self.budget
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn metrics(&self) -> &TreeMetrics {
        &self.metrics
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Time since the last activity.
    pub fn idle_duration(&self) -> Duration {
        Utc::now() - self.last_activity
    }

    pub fn session_duration(&self) -> Duration {
        Utc::now() - self.created_at
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}
