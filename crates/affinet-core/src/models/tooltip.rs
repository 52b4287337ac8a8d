use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::member::MemberId;
use crate::constants::TOOLTIP_ID_KEY;

/// Supplemental per-member metadata (join date, activation date, classification,
/// status label). Joined to members by `id`; every other field is opaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipRecord {
    pub id: Option<MemberId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl TooltipRecord {
    pub fn new(id: impl Into<MemberId>) -> Self {
        Self {
            id: Some(id.into()),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Build a tooltip from one element of the `tooltip` array. Never fails.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                let id = map.remove(TOOLTIP_ID_KEY).as_ref().and_then(MemberId::from_json);
                Self {
                    id,
                    attributes: map,
                }
            }
            _ => Self {
                id: None,
                attributes: Map::new(),
            },
        }
    }
}

impl<'de> Deserialize<'de> for TooltipRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
