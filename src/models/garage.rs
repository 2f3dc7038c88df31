//! Garage model

use serde::{Deserialize, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garage {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Maximum number of maintenance records the garage may hold.
    #[serde(default)]
    pub capacity: i64,
}

/// One row of `GET /garages/dailyAvailabilityReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAvailabilityEntry {
    pub date: String,
    #[serde(default)]
    pub requests: i64,
    #[serde(default)]
    pub available_capacity: i64,
}
