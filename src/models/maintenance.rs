//! Maintenance record model

use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// A maintenance record as stored by the backend.
///
/// `carName` / `garageName` are filled by some backend versions; the views
/// never rely on them and compute their own names from the lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: EntityId,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub scheduled_date: String,
    pub car_id: EntityId,
    pub garage_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garage_name: Option<String>,
}
