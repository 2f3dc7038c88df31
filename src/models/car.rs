//! Car model
//!
//! A car as returned by `GET /cars`. Every field except the id is optional
//! because the backend leaves some of them out depending on the endpoint.

use serde::{Deserialize, Serialize};

use super::garage::Garage;
use super::id::{lenient_id_list, EntityId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub production_year: Option<i32>,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default, deserialize_with = "lenient_id_list")]
    pub garage_ids: Vec<EntityId>,
    /// Expanded garages, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garages: Option<Vec<Garage>>,
}

impl Car {
    /// "Make Model" label used wherever a car is shown by name.
    pub fn display_name(&self) -> Option<String> {
        let make = self.make.as_deref().map(str::trim).filter(|m| !m.is_empty())?;
        match self.model.as_deref().map(str::trim) {
            Some(model) if !model.is_empty() => Some(format!("{} {}", make, model)),
            _ => Some(make.to_string()),
        }
    }

    /// Garage ids associated with the car, preferring the expanded list.
    pub fn associated_garage_ids(&self) -> Vec<EntityId> {
        match &self.garages {
            Some(garages) if !garages.is_empty() => {
                garages.iter().map(|g| g.id.clone()).collect()
            }
            _ => self.garage_ids.clone(),
        }
    }
}
