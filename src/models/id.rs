//! Entity identifiers
//!
//! The fleet API is not consistent about identifier types: garages and
//! maintenance records use integer row ids, cars may use UUID strings, and the
//! same id can come back as `3` in one payload and `"3"` in another.
//! [`EntityId`] accepts both, compares textually and goes back out as a
//! string. Car payloads want their garage ids as numbers; see
//! [`numeric_id_list`].

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it is an integer.
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Same entity: numeric ids compare by value (`"010"` is `10`),
    /// anything else by text.
    pub fn refers_to(&self, other: &EntityId) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("identifier cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Serialize ids as JSON numbers where they are integers.
pub fn numeric_id_list<S: Serializer>(ids: &[EntityId], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(ids.len()))?;
    for id in ids {
        match id.as_number() {
            Some(n) => seq.serialize_element(&n)?,
            None => seq.serialize_element(id.as_str())?,
        }
    }
    seq.end()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for EntityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => EntityId::from(n),
            RawId::Text(s) => EntityId::new(s),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(EntityId::from)
    }
}

/// Deserialize an optional list of ids, dropping `null` entries.
///
/// The backend aggregates garage ids with a LEFT JOIN, so a car without
/// garages comes back as `[null]`.
pub fn lenient_id_list<'de, D>(deserializer: D) -> Result<Vec<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<RawId>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(EntityId::from)
        .filter(|id| !id.as_str().is_empty())
        .collect())
}
