//! RecordIndex: arena of member records with id and parent lookups.
//!
//! Records live in a `Vec` in source order. The id map and the child lists
//! hold arena slots, never references, so the storage itself cannot loop even
//! when the parent data does.
//!
//! A repeated id leaves a stale slot listed under its old parent. Descent goes
//! through live slots only (the id's winning record), so every member has at
//! most one parent edge and all walks agree on its level.

use std::collections::HashMap;

use tracing::debug;

use affinet_core::{AnomalyKind, AnomalyTally, MemberId, MemberRecord};

/// Indexed view over one snapshot's member records.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    /// Valid records in source order.
    records: Vec<MemberRecord>,
    /// Member id per slot, parallel to `records`.
    ids: Vec<MemberId>,
    /// Member id → winning slot (last write wins).
    by_id: HashMap<MemberId, usize>,
    /// Parent id (or `None` for no parent) → child slots in source order.
    children_by_parent: HashMap<Option<MemberId>, Vec<usize>>,
    anomalies: AnomalyTally,
}

impl RecordIndex {
    /// Index a borrowed record list.
    pub fn build(records: &[MemberRecord]) -> Self {
        Self::from_records(records.to_vec())
    }

    /// Index an owned record list.
    ///
    /// Records without a `member_id` are skipped and counted. A repeated id
    /// overwrites the earlier slot in the id map while both slots stay listed
    /// under their own parents.
    pub fn from_records(records: Vec<MemberRecord>) -> Self {
        let mut index = Self {
            records: Vec::with_capacity(records.len()),
            ids: Vec::with_capacity(records.len()),
            by_id: HashMap::with_capacity(records.len()),
            children_by_parent: HashMap::new(),
            anomalies: AnomalyTally::default(),
        };

        for record in records {
            let Some(member_id) = record.member_id else {
                index.anomalies.record(AnomalyKind::MalformedRecord);
                continue;
            };

            let slot = index.records.len();
            if index.by_id.insert(member_id, slot).is_some() {
                index.anomalies.record(AnomalyKind::DuplicateMember);
                debug!(member_id = %member_id, "duplicate member id, later record wins");
            }
            index
                .children_by_parent
                .entry(record.parent_id)
                .or_default()
                .push(slot);
            index.ids.push(member_id);
            index.records.push(record);
        }

        debug!(
            slots = index.records.len(),
            members = index.by_id.len(),
            malformed = index.anomalies.malformed_records,
            "record index built"
        );
        index
    }

    /// The winning record for `member_id`.
    pub fn get(&self, member_id: MemberId) -> Option<&MemberRecord> {
        self.by_id.get(&member_id).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, member_id: MemberId) -> bool {
        self.by_id.contains_key(&member_id)
    }

    /// Whether `parent_id` is absent or points outside this index.
    pub fn is_root_parent(&self, parent_id: Option<MemberId>) -> bool {
        match parent_id {
            None => true,
            Some(parent) => !self.contains(parent),
        }
    }

    /// Child slots listed under `parent_id`, in source order.
    pub fn children_of(&self, parent_id: Option<MemberId>) -> &[usize] {
        self.children_by_parent
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `slot` holds the winning record for its id.
    pub fn is_live_slot(&self, slot: usize) -> bool {
        self.ids
            .get(slot)
            .and_then(|id| self.by_id.get(id))
            .is_some_and(|&winner| winner == slot)
    }

    /// Children of `parent` through live slots, in source order.
    pub fn child_ids(&self, parent: MemberId) -> impl DoubleEndedIterator<Item = MemberId> + '_ {
        self.children_of(Some(parent))
            .iter()
            .filter(move |&&slot| self.is_live_slot(slot))
            .map(move |&slot| self.ids[slot])
    }

    pub fn has_children(&self, parent: MemberId) -> bool {
        self.child_ids(parent).next().is_some()
    }

    /// Member id stored at `slot`.
    pub fn member_at(&self, slot: usize) -> Option<MemberId> {
        self.ids.get(slot).copied()
    }

    /// Record stored at `slot` (including overwritten duplicates).
    pub fn record_at(&self, slot: usize) -> Option<&MemberRecord> {
        self.records.get(slot)
    }

    /// Member ids of every slot, in source order (duplicates included).
    pub fn slot_ids(&self) -> &[MemberId] {
        &self.ids
    }

    /// Number of distinct member ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Number of valid slots (distinct ids plus overwritten duplicates).
    pub fn slot_count(&self) -> usize {
        self.records.len()
    }

    pub fn anomalies(&self) -> &AnomalyTally {
        &self.anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(index: &RecordIndex, parent: i64) -> Vec<i64> {
        index.child_ids(MemberId(parent)).map(|id| id.0).collect()
    }

    #[test]
    fn children_keep_source_order() {
        let index = RecordIndex::build(&[
            MemberRecord::new(1, None),
            MemberRecord::new(3, Some(1)),
            MemberRecord::new(2, Some(1)),
            MemberRecord::new(4, Some(1)),
        ]);
        assert_eq!(ids(&index, 1), vec![3, 2, 4]);
        assert_eq!(index.children_of(None), &[0]);
        assert!(index.anomalies().is_clean());
    }

    #[test]
    fn duplicate_ids_last_write_wins_but_both_stay_listed() {
        let index = RecordIndex::build(&[
            MemberRecord::new(1, None),
            MemberRecord::new(2, None),
            MemberRecord::new(3, Some(1)).with_attribute("v", "first"),
            MemberRecord::new(3, Some(2)).with_attribute("v", "second"),
        ]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.slot_count(), 4);
        assert_eq!(index.get(MemberId(3)).unwrap().attributes["v"], "second");
        assert_eq!(index.children_of(Some(MemberId(1))), &[2]);
        assert_eq!(index.children_of(Some(MemberId(2))), &[3]);
        assert_eq!(index.anomalies().duplicate_members, 1);

        // Only the winning slot is descended through.
        assert!(!index.is_live_slot(2));
        assert!(index.is_live_slot(3));
        assert!(ids(&index, 1).is_empty());
        assert!(!index.has_children(MemberId(1)));
        assert_eq!(ids(&index, 2), vec![3]);
    }

    #[test]
    fn malformed_records_are_skipped_and_counted() {
        let mut broken = MemberRecord::new(9, None);
        broken.member_id = None;
        let index = RecordIndex::build(&[broken.clone(), MemberRecord::new(1, None), broken]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.anomalies().malformed_records, 2);
        assert_eq!(index.member_at(0), Some(MemberId(1)));
    }

    #[test]
    fn unresolved_parent_counts_as_root_parent() {
        let index = RecordIndex::build(&[MemberRecord::new(1, Some(7))]);
        assert!(index.is_root_parent(Some(MemberId(7))));
        assert!(index.is_root_parent(None));
        assert!(!index.is_root_parent(Some(MemberId(1))));
    }
}
