use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::{push_param, QueryParams};
use crate::models::{EntityId, MaintenanceRecord};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_date;

pub const UNKNOWN_NAME: &str = "N/A";

/// Server-side filters for `GET /maintenance`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceFilters {
    pub car_id: Option<EntityId>,
    pub garage_id: Option<EntityId>,
    pub scheduled_date: Option<String>,
}

impl MaintenanceFilters {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_param(&mut params, "carId", self.car_id.as_ref());
        push_param(&mut params, "garageId", self.garage_id.as_ref());
        push_param(&mut params, "scheduledDate", self.scheduled_date.as_deref());
        params
    }
}

/// A maintenance record joined with the display names of its car and garage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedMaintenance {
    pub id: EntityId,
    pub service_type: String,
    pub scheduled_date: String,
    pub car_id: EntityId,
    pub garage_id: EntityId,
    pub car_name: String,
    pub garage_name: String,
}

impl DecoratedMaintenance {
    pub fn new(record: MaintenanceRecord, car_name: Option<String>, garage_name: Option<String>) -> Self {
        Self {
            id: record.id,
            service_type: record.service_type,
            scheduled_date: record.scheduled_date,
            car_id: record.car_id,
            garage_id: record.garage_id,
            car_name: car_name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            garage_name: garage_name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        }
    }

    /// Date part of `scheduled_date`, when it parses.
    pub fn scheduled_day(&self) -> Option<NaiveDate> {
        validate_date(&self.scheduled_date).ok()
    }
}

/// Client-side filter applied on top of the server-filtered records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceLocalFilter {
    pub car_id: Option<EntityId>,
    pub garage_id: Option<EntityId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl MaintenanceLocalFilter {
    /// Date bounds are inclusive. Records whose date does not parse are kept.
    pub fn matches(&self, record: &DecoratedMaintenance) -> bool {
        if let Some(car_id) = &self.car_id {
            if &record.car_id != car_id {
                return false;
            }
        }
        if let Some(garage_id) = &self.garage_id {
            if &record.garage_id != garage_id {
                return false;
            }
        }
        if let Some(day) = record.scheduled_day() {
            if self.start_date.map_or(false, |start| day < start) {
                return false;
            }
            if self.end_date.map_or(false, |end| day > end) {
                return false;
            }
        }
        true
    }
}

/// Add-maintenance form, as typed by the operator
#[derive(Debug, Clone, Default, Validate)]
pub struct NewMaintenanceForm {
    #[validate(length(min = 1))]
    pub service_type: String,
    #[validate(length(min = 1))]
    pub scheduled_date: String,
    #[validate(length(min = 1))]
    pub garage_id: String,
    #[validate(length(min = 1))]
    pub car_id: String,
}

impl NewMaintenanceForm {
    pub fn new(service_type: &str, scheduled_date: &str, garage_id: &str, car_id: &str) -> Self {
        Self {
            service_type: service_type.trim().to_string(),
            scheduled_date: scheduled_date.trim().to_string(),
            garage_id: garage_id.trim().to_string(),
            car_id: car_id.trim().to_string(),
        }
    }

    /// True when every field has been filled in.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_request(&self) -> AppResult<CreateMaintenanceRequest> {
        self.validate()?;
        validate_date(&self.scheduled_date)
            .map_err(|_| validation_error("scheduledDate", "must be a YYYY-MM-DD date"))?;

        Ok(CreateMaintenanceRequest {
            service_type: self.service_type.clone(),
            scheduled_date: self.scheduled_date.clone(),
            garage_id: EntityId::new(self.garage_id.as_str()),
            car_id: EntityId::new(self.car_id.as_str()),
        })
    }
}

/// Body of `POST /maintenance`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub service_type: String,
    pub scheduled_date: String,
    pub garage_id: EntityId,
    pub car_id: EntityId,
}

/// Body of `PUT /maintenance/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    pub id: EntityId,
    pub service_type: String,
    pub scheduled_date: String,
    pub garage_id: EntityId,
    pub car_id: EntityId,
}

/// Local copy of a maintenance record being edited
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceEditBuffer {
    pub id: EntityId,
    pub service_type: String,
    pub scheduled_date: String,
    pub garage_id: EntityId,
    pub car_id: EntityId,
}

impl From<&DecoratedMaintenance> for MaintenanceEditBuffer {
    fn from(record: &DecoratedMaintenance) -> Self {
        Self {
            id: record.id.clone(),
            service_type: record.service_type.clone(),
            scheduled_date: record.scheduled_date.clone(),
            garage_id: record.garage_id.clone(),
            car_id: record.car_id.clone(),
        }
    }
}

impl MaintenanceEditBuffer {
    pub fn to_request(&self) -> AppResult<UpdateMaintenanceRequest> {
        if self.service_type.trim().is_empty() {
            return Err(validation_error("serviceType", "is required"));
        }
        validate_date(&self.scheduled_date)
            .map_err(|_| validation_error("scheduledDate", "must be a YYYY-MM-DD date"))?;

        Ok(UpdateMaintenanceRequest {
            id: self.id.clone(),
            service_type: self.service_type.trim().to_string(),
            scheduled_date: self.scheduled_date.trim().to_string(),
            garage_id: self.garage_id.clone(),
            car_id: self.car_id.clone(),
        })
    }
}
