pub mod anomaly;
pub mod member;
pub mod node;
pub mod selection;
pub mod snapshot;
pub mod tooltip;

pub use anomaly::{AnomalyKind, AnomalyTally};
pub use member::{MemberId, MemberRecord};
pub use node::{NodeView, TreeNode};
pub use selection::{Breadcrumb, SelectionState};
pub use snapshot::{NetworkSnapshot, SnapshotVersion};
pub use tooltip::TooltipRecord;
