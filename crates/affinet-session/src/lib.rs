//! # affinet-session
//!
//! UI-facing state around a referral tree: which members are expanded, which
//! member is the current display root, how we got there, and which snapshot
//! fetch is allowed to replace the current one.

pub mod expansion;
pub mod fetch;
pub mod manager;
pub mod navigation;
pub mod session;

pub use expansion::{ExpansionAction, ExpansionState};
pub use fetch::{ApplyOutcome, FetchSequencer, FetchTicket};
pub use manager::SessionManager;
pub use navigation::{NavigationAction, NavigationController, NavigationState};
pub use session::{DisplaySession, LoadedSnapshot};
