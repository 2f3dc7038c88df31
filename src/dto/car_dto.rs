use serde::Serialize;
use validator::Validate;

use super::{push_param, QueryParams};
use crate::models::{numeric_id_list, Car, EntityId};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::parse_year;

/// Server-side filters for `GET /cars`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFilters {
    pub make: Option<String>,
    pub garage_id: Option<EntityId>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

impl CarFilters {
    /// Query parameters with every empty filter left out.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_param(&mut params, "carMake", self.make.as_deref());
        push_param(&mut params, "garageId", self.garage_id.as_ref());
        push_param(&mut params, "fromYear", self.from_year);
        push_param(&mut params, "toYear", self.to_year);
        params
    }
}

/// Add-car form, as typed by the operator
#[derive(Debug, Clone, Default, Validate)]
pub struct NewCarForm {
    #[validate(length(min = 1))]
    pub make: String,
    #[validate(length(min = 1))]
    pub model: String,
    pub production_year: String,
    #[validate(length(min = 1))]
    pub license_plate: String,
    pub garage_ids: Vec<String>,
}

impl NewCarForm {
    /// Validate the form and coerce year and garage ids to numbers.
    pub fn to_request(&self) -> AppResult<CreateCarRequest> {
        let form = Self {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            production_year: self.production_year.trim().to_string(),
            license_plate: self.license_plate.trim().to_string(),
            garage_ids: self.garage_ids.clone(),
        };
        form.validate()?;

        let production_year = parse_year(&form.production_year)
            .map_err(|_| validation_error("productionYear", "must be a whole year"))?;
        let garage_ids = coerce_garage_ids(&form.garage_ids)?;

        Ok(CreateCarRequest {
            make: form.make,
            model: form.model,
            production_year,
            license_plate: form.license_plate,
            garage_ids,
        })
    }
}

fn coerce_garage_ids(raw: &[String]) -> AppResult<Vec<EntityId>> {
    raw.iter()
        .map(|id| {
            id.trim()
                .parse::<i64>()
                .map(EntityId::from)
                .map_err(|_| validation_error("garageIds", "garage ids must be numeric"))
        })
        .collect()
}

/// Body of `POST /cars`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub license_plate: String,
    #[serde(serialize_with = "numeric_id_list")]
    pub garage_ids: Vec<EntityId>,
}

/// Body of `PUT /cars/{id}`: the full record, keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub id: EntityId,
    pub make: String,
    pub model: String,
    pub production_year: Option<i32>,
    pub license_plate: String,
    #[serde(serialize_with = "numeric_id_list")]
    pub garage_ids: Vec<EntityId>,
}

/// Local copy of a car being edited
#[derive(Debug, Clone, PartialEq)]
pub struct CarEditBuffer {
    pub id: Option<EntityId>,
    pub make: String,
    pub model: String,
    pub production_year: Option<i32>,
    pub license_plate: String,
    pub garage_ids: Vec<EntityId>,
}

impl From<&Car> for CarEditBuffer {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.clone(),
            make: car.make.clone().unwrap_or_default(),
            model: car.model.clone().unwrap_or_default(),
            production_year: car.production_year,
            license_plate: car.license_plate.clone().unwrap_or_default(),
            garage_ids: car.associated_garage_ids(),
        }
    }
}

impl CarEditBuffer {
    pub fn to_request(&self) -> Option<UpdateCarRequest> {
        let id = self.id.clone()?;
        Some(UpdateCarRequest {
            id,
            make: self.make.clone(),
            model: self.model.clone(),
            production_year: self.production_year,
            license_plate: self.license_plate.clone(),
            garage_ids: self.garage_ids.clone(),
        })
    }
}
