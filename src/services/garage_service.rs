//! Garage management view
//!
//! Garage CRUD plus the per-day availability report the backend computes
//! from each garage's capacity.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use super::operator::{report_failure, Operator};
use crate::clients::FleetApi;
use crate::dto::{CreateGarageRequest, DailyAvailabilityQuery, UpdateGarageRequest};
use crate::models::{DailyAvailabilityEntry, EntityId, Garage};
use crate::utils::errors::{bad_request_error, AppResult};

pub struct GarageView {
    api: Arc<dyn FleetApi>,
    operator: Arc<dyn Operator>,
    garages: Vec<Garage>,
}

impl GarageView {
    pub fn new(api: Arc<dyn FleetApi>, operator: Arc<dyn Operator>) -> Self {
        Self {
            api,
            operator,
            garages: Vec::new(),
        }
    }

    pub fn garages(&self) -> &[Garage] {
        &self.garages
    }

    pub async fn refresh(&mut self) -> AppResult<()> {
        self.garages = self.api.list_garages().await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error fetching garages",
                "An error occurred while fetching garages.",
                e,
            )
        })?;
        info!("🏢 Loaded {} garages", self.garages.len());
        Ok(())
    }

    pub async fn add_garage(&mut self, request: &CreateGarageRequest) -> AppResult<Garage> {
        request.validate().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid garage form",
                "Please fill all garage fields with valid values.",
                e.into(),
            )
        })?;

        let garage = self.api.create_garage(request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error adding garage",
                "An error occurred while adding the garage.",
                e,
            )
        })?;

        self.operator.alert("Garage added successfully!");
        self.garages.push(garage.clone());
        Ok(garage)
    }

    pub async fn update_garage(&mut self, id: &EntityId, request: &UpdateGarageRequest) -> AppResult<()> {
        if request.is_empty() {
            self.operator.alert("Nothing to update.");
            return Err(bad_request_error("Nothing to update."));
        }
        request.validate().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid garage update",
                "Please fill all garage fields with valid values.",
                e.into(),
            )
        })?;

        self.api.update_garage(id, request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error updating garage",
                "An error occurred while updating the garage.",
                e,
            )
        })?;

        self.operator.alert("Garage updated successfully!");
        self.refresh().await
    }

    /// Delete a garage after confirmation. Returns `false` if the operator declined.
    pub async fn delete_garage(&mut self, id: &EntityId) -> AppResult<bool> {
        if !self.operator.confirm("Are you sure you want to delete this garage?") {
            return Ok(false);
        }

        self.api.delete_garage(id).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error deleting garage",
                "An error occurred while deleting the garage.",
                e,
            )
        })?;

        self.operator.alert("Garage deleted successfully!");
        self.refresh().await?;
        Ok(true)
    }

    pub async fn daily_availability(&self, query: &DailyAvailabilityQuery) -> AppResult<Vec<DailyAvailabilityEntry>> {
        let entries = self.api.daily_availability_report(query).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error fetching availability report",
                "An error occurred while fetching the availability report.",
                e,
            )
        })?;

        if entries.is_empty() {
            self.operator.alert("No data available for the selected criteria.");
        }
        Ok(entries)
    }
}
