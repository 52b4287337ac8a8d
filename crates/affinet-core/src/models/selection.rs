use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::member::MemberId;

/// One step of re-rooting history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub member_id: MemberId,
    pub label: String,
}

impl Breadcrumb {
    pub fn new(member_id: impl Into<MemberId>, label: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            label: label.into(),
        }
    }
}

/// Current display root plus the breadcrumb trail that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_root_id: MemberId,
    pub breadcrumb: Vec<Breadcrumb>,
}
