use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::constants::{MEMBER_ID_KEY, PARENT_ID_KEY};

/// Identifier of a member in the referral network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(transparent)]
pub struct MemberId(#[ts(type = "number")] pub i64);

impl MemberId {
    /// Read an id from a wire value.
    ///
    /// Accepts a JSON integer or a string holding an integer. Anything else
    /// (null, floats, booleans, free text) reads as absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Self),
            _ => None,
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One member row of a snapshot.
///
/// `member_id` is `None` for malformed rows; those are skipped at index time.
/// Everything other than the two id fields is opaque and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub member_id: Option<MemberId>,
    pub parent_id: Option<MemberId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MemberRecord {
    pub fn new(member_id: impl Into<MemberId>, parent_id: Option<i64>) -> Self {
        Self {
            member_id: Some(member_id.into()),
            parent_id: parent_id.map(MemberId),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque passthrough attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Build a record from one element of the `tree` array.
    ///
    /// Never fails: non-object elements become malformed records.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                let member_id = map.remove(MEMBER_ID_KEY).as_ref().and_then(MemberId::from_json);
                let parent_id = map.remove(PARENT_ID_KEY).as_ref().and_then(MemberId::from_json);
                Self {
                    member_id,
                    parent_id,
                    attributes: map,
                }
            }
            _ => Self {
                member_id: None,
                parent_id: None,
                attributes: Map::new(),
            },
        }
    }

    /// Display label from `field`, falling back to the member id.
    pub fn label(&self, field: &str) -> String {
        match self.attributes.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => self
                .member_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for MemberRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
