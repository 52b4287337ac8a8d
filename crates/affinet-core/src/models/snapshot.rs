//! NetworkSnapshot: one complete fetch result, treated as an immutable unit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::member::MemberRecord;
use super::tooltip::TooltipRecord;
use crate::errors::{AffinetResult, SnapshotError};

/// The paired member and tooltip collections returned by one fetch.
///
/// Wire shape: `{"tree": [...], "tooltip": [...]}`. A newer fetch replaces a
/// snapshot wholesale; there is no incremental patching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct NetworkSnapshot {
    #[serde(rename = "tree")]
    pub records: Vec<MemberRecord>,
    #[serde(rename = "tooltip")]
    pub tooltips: Vec<TooltipRecord>,
}

/// Wire document before element-level leniency is applied.
#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    tree: Value,
    #[serde(default)]
    tooltip: Value,
}

impl TryFrom<RawSnapshot> for NetworkSnapshot {
    type Error = SnapshotError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let records = match raw.tree {
            Value::Array(items) => items.into_iter().map(MemberRecord::from_value).collect(),
            Value::Null => return Err(SnapshotError::MissingTree),
            other => {
                return Err(SnapshotError::InvalidDocument {
                    reason: format!("`tree` must be an array, found {}", json_kind(&other)),
                })
            }
        };
        // Tooltips are supplemental: anything but an array reads as none.
        let tooltips = match raw.tooltip {
            Value::Array(items) => items.into_iter().map(TooltipRecord::from_value).collect(),
            _ => Vec::new(),
        };
        Ok(Self { records, tooltips })
    }
}

impl NetworkSnapshot {
    pub fn new(records: Vec<MemberRecord>, tooltips: Vec<TooltipRecord>) -> Self {
        Self { records, tooltips }
    }

    /// Parse a snapshot document.
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(input).map_err(|e| {
            SnapshotError::InvalidDocument {
                reason: e.to_string(),
            }
        })?;
        Self::try_from(raw)
    }

    /// Parse a snapshot document from raw bytes (e.g. an HTTP body).
    pub fn from_slice(input: &[u8]) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_slice(input).map_err(|e| {
            SnapshotError::InvalidDocument {
                reason: e.to_string(),
            }
        })?;
        Self::try_from(raw)
    }

    /// blake3 hex digest of the canonical JSON serialization.
    ///
    /// Two snapshots with the same content hash produce identical traversals.
    pub fn content_hash(&self) -> AffinetResult<String> {
        let serialized = serde_json::to_vec(self)?;
        Ok(blake3::hash(&serialized).to_hex().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Identity of an applied snapshot within a display session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotVersion {
    /// Fetch ticket the snapshot was applied under.
    pub sequence: u64,
    /// blake3 content hash, see [`NetworkSnapshot::content_hash`].
    pub content_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberId;

    #[test]
    fn missing_tooltip_reads_as_empty() {
        let snapshot = NetworkSnapshot::from_json(r#"{"tree": [{"memberId": 1}]}"#).unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.tooltips.is_empty());
    }

    #[test]
    fn non_array_tree_is_rejected() {
        let err = NetworkSnapshot::from_json(r#"{"tree": 5}"#).unwrap_err();
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn content_hash_is_stable_and_content_sensitive() {
        let a = NetworkSnapshot::new(vec![MemberRecord::new(1, None)], Vec::new());
        let b = a.clone();
        let c = NetworkSnapshot::new(vec![MemberRecord::new(2, None)], Vec::new());
        assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
        assert_ne!(a.content_hash().unwrap(), c.content_hash().unwrap());
        assert_eq!(a.records[0].member_id, Some(MemberId(1)));
    }
}
