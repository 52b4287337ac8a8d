//! SessionManager: concurrent display sessions via DashMap.

use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use affinet_core::errors::SessionError;
use affinet_core::{AffinetConfig, AffinetResult};
use affinet_observability::TreeMetrics;
use affinet_tree::SubtreeCache;

use crate::session::DisplaySession;

/// Thread-safe registry of display sessions sharing one traversal cache.
pub struct SessionManager {
    sessions: Arc<DashMap<String, DisplaySession>>,
    config: AffinetConfig,
    cache: SubtreeCache,
    metrics: Arc<TreeMetrics>,
}

impl SessionManager {
    pub fn new(config: AffinetConfig) -> Self {
        let cache = SubtreeCache::from_config(&config.session);
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
            cache,
            metrics: Arc::new(TreeMetrics::new()),
        }
    }

    /// Create a session under a fresh uuid and return the id.
    pub fn create_session(&self) -> String {
        self.create_session_with_id(Uuid::new_v4().to_string())
    }

    /// Create (or replace) the session `session_id`.
    pub fn create_session_with_id(&self, session_id: impl Into<String>) -> String {
        let session_id = session_id.into();
        let session = DisplaySession::with_shared(
            session_id.clone(),
            &self.config,
            self.cache.clone(),
            Arc::clone(&self.metrics),
        );
        self.sessions.insert(session_id.clone(), session);
        session_id
    }

    /// Run `f` against the session, holding its shard lock for the duration.
    pub fn with_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut DisplaySession) -> R,
    ) -> AffinetResult<R> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::SessionNotFound(session_id.to_string()))?;
        Ok(f(entry.value_mut()))
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn remove_session(&self, session_id: &str) -> Option<DisplaySession> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many went.
    pub fn cleanup_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.idle_duration() <= max_idle);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!(removed, remaining = self.sessions.len(), "idle sessions removed");
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    pub fn metrics(&self) -> &Arc<TreeMetrics> {
        &self.metrics
    }

    pub fn cache(&self) -> &SubtreeCache {
        &self.cache
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(AffinetConfig::default())
    }
}
