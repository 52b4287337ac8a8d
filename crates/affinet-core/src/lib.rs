//! # affinet-core
//!
//! Foundation crate for the affiliate hierarchy engine.
//! Defines the snapshot data model, derived node views, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::AffinetConfig;
pub use errors::{AffinetError, AffinetResult};
pub use models::{
    AnomalyKind, AnomalyTally, Breadcrumb, MemberId, MemberRecord, NetworkSnapshot, NodeView,
    SelectionState, SnapshotVersion, TooltipRecord, TreeNode,
};
