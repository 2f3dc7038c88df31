use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::{push_param, QueryParams};
use crate::models::EntityId;
use crate::utils::errors::{bad_request_error, AppResult};

/// Body of `POST /garages`
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateGarageRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub location: String,
    pub city: String,
    #[validate(range(min = 0))]
    pub capacity: i64,
}

/// Body of `PUT /garages/{id}`; unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct UpdateGarageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub capacity: Option<i64>,
}

impl UpdateGarageRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.city.is_none() && self.capacity.is_none()
    }
}

/// Query of `GET /garages/dailyAvailabilityReport`
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAvailabilityQuery {
    pub garage_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DailyAvailabilityQuery {
    pub fn new(garage_id: EntityId, start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Self> {
        if end_date < start_date {
            return Err(bad_request_error("End date must not be before start date."));
        }
        Ok(Self {
            garage_id,
            start_date,
            end_date,
        })
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_param(&mut params, "garageId", Some(&self.garage_id));
        push_param(&mut params, "startDate", Some(self.start_date.format("%Y-%m-%d")));
        push_param(&mut params, "endDate", Some(self.end_date.format("%Y-%m-%d")));
        params
    }
}
