//! TooltipIndex: one pre-built id → tooltip map per snapshot.

use std::collections::HashMap;

use affinet_core::{AnomalyKind, AnomalyTally, MemberId, TooltipRecord};

#[derive(Debug, Clone, Default)]
pub struct TooltipIndex {
    by_id: HashMap<MemberId, TooltipRecord>,
    anomalies: AnomalyTally,
}

impl TooltipIndex {
    pub fn build(tooltips: &[TooltipRecord]) -> Self {
        Self::from_records(tooltips.to_vec())
    }

    /// Later tooltips for the same id replace earlier ones; tooltips without an
    /// id are dropped and counted.
    pub fn from_records(tooltips: Vec<TooltipRecord>) -> Self {
        let mut index = Self {
            by_id: HashMap::with_capacity(tooltips.len()),
            anomalies: AnomalyTally::default(),
        };
        for tooltip in tooltips {
            match tooltip.id {
                Some(id) => {
                    index.by_id.insert(id, tooltip);
                }
                None => index.anomalies.record(AnomalyKind::MalformedTooltip),
            }
        }
        index
    }

    pub fn get(&self, member_id: MemberId) -> Option<&TooltipRecord> {
        self.by_id.get(&member_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn anomalies(&self) -> &AnomalyTally {
        &self.anomalies
    }
}
