//! Fetch sequencing. A snapshot response is applied only if no response from a
//! newer request has been applied already.

use serde::Serialize;

use affinet_core::SnapshotVersion;

/// Monotonic token issued when a snapshot request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Result of offering a snapshot response to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The snapshot replaced the previous one.
    Applied(SnapshotVersion),
    /// A newer response was already applied; nothing changed.
    Stale {
        ticket: FetchTicket,
        latest_applied: FetchTicket,
    },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Issues tickets and remembers the newest one applied.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    issued: u64,
    latest_applied: Option<FetchTicket>,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// The newest applied ticket if `ticket` is not newer than it.
    pub fn superseded_by(&self, ticket: FetchTicket) -> Option<FetchTicket> {
        self.latest_applied.filter(|latest| *latest >= ticket)
    }

    /// Record `ticket` as applied.
    pub fn commit(&mut self, ticket: FetchTicket) {
        if self.latest_applied.map_or(true, |latest| ticket > latest) {
            self.latest_applied = Some(ticket);
        }
    }

    pub fn latest_applied(&self) -> Option<FetchTicket> {
        self.latest_applied
    }

    /// Requests started but not yet answered by an applied response.
    pub fn in_flight(&self) -> u64 {
        self.issued - self.latest_applied.map_or(0, FetchTicket::sequence)
    }
}
