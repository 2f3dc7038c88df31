//! Car management view
//!
//! Keeps the car table, the garage lookup used by the filter and form
//! pickers, and the add/edit buffers, mirroring what the operator sees.

use std::sync::Arc;

use tracing::info;

use super::operator::{report_failure, Operator};
use crate::clients::FleetApi;
use crate::dto::{CarEditBuffer, CarFilters, NewCarForm};
use crate::models::{Car, EntityId, Garage};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub struct CarView {
    api: Arc<dyn FleetApi>,
    operator: Arc<dyn Operator>,
    cars: Vec<Car>,
    garages: Vec<Garage>,
    filters: CarFilters,
    editing: Option<CarEditBuffer>,
}

impl CarView {
    pub fn new(api: Arc<dyn FleetApi>, operator: Arc<dyn Operator>) -> Self {
        Self {
            api,
            operator,
            cars: Vec::new(),
            garages: Vec::new(),
            filters: CarFilters::default(),
            editing: None,
        }
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn garages(&self) -> &[Garage] {
        &self.garages
    }

    pub fn editing(&self) -> Option<&CarEditBuffer> {
        self.editing.as_ref()
    }

    pub fn is_updating(&self) -> bool {
        self.editing.is_some()
    }

    /// Fetch the filtered cars and the full garage list.
    ///
    /// Both requests run concurrently and are applied independently: a failed
    /// garage fetch does not discard a successful car fetch.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let (cars, garages) = futures::join!(self.api.list_cars(&self.filters), self.api.list_garages());

        let mut failure = None;
        match cars {
            Ok(cars) => {
                info!("🚗 Loaded {} cars", cars.len());
                self.cars = cars;
            }
            Err(e) => {
                failure = Some(report_failure(
                    self.operator.as_ref(),
                    "Error fetching cars",
                    "An error occurred while fetching cars.",
                    e,
                ));
            }
        }
        match garages {
            Ok(garages) => self.garages = garages,
            Err(e) => {
                let err = report_failure(
                    self.operator.as_ref(),
                    "Error fetching garages",
                    "An error occurred while fetching garages.",
                    e,
                );
                failure.get_or_insert(err);
            }
        }

        failure.map_or(Ok(()), Err)
    }

    /// Replace the filters and re-fetch.
    pub async fn set_filters(&mut self, filters: CarFilters) -> AppResult<()> {
        self.filters = filters;
        self.refresh().await
    }

    pub async fn add_car(&mut self, form: &NewCarForm) -> AppResult<Car> {
        let request = form.to_request().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid car form",
                "Please fill all car fields with valid values.",
                e,
            )
        })?;

        info!("🚗 Adding car {} {}", request.make, request.model);
        let car = self.api.create_car(&request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error adding car",
                "An error occurred while adding the car.",
                e,
            )
        })?;

        self.operator.alert("Car added successfully!");
        self.cars.push(car.clone());
        Ok(car)
    }

    /// Copy a car from the table into the edit buffer.
    pub fn begin_edit(&mut self, id: &EntityId) -> AppResult<&mut CarEditBuffer> {
        let car = self
            .cars
            .iter()
            .find(|car| car.id.as_ref() == Some(id))
            .ok_or_else(|| not_found_error("Car", id.as_str()))?;

        Ok(self.editing.insert(CarEditBuffer::from(car)))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the edit buffer as a full-record update, then re-fetch.
    pub async fn submit_edit(&mut self) -> AppResult<()> {
        let Some(request) = self.editing.as_ref().and_then(CarEditBuffer::to_request) else {
            self.operator.alert("No car selected for update.");
            return Err(bad_request_error("No car selected for update."));
        };

        info!("🚗 Updating car {}", request.id);
        self.api.update_car(&request.id, &request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error updating car",
                "An error occurred while updating the car.",
                e,
            )
        })?;

        self.operator.alert("Car updated successfully!");
        self.editing = None;
        self.refresh().await
    }

    /// Delete a car after confirmation. Returns `false` if the operator declined.
    pub async fn delete_car(&mut self, id: &EntityId) -> AppResult<bool> {
        if !self.operator.confirm("Are you sure you want to delete this car?") {
            info!("🚗 Deletion of car {} cancelled", id);
            return Ok(false);
        }

        self.api.delete_car(id).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error deleting car",
                "An error occurred while deleting the car.",
                e,
            )
        })?;

        self.operator.alert("Car deleted successfully!");
        if self.editing.as_ref().and_then(|b| b.id.as_ref()) == Some(id) {
            self.editing = None;
        }
        self.refresh().await?;
        Ok(true)
    }
}
