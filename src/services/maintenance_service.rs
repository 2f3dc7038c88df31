//! Maintenance management view
//!
//! Records are fetched with the server filters, then decorated with car and
//! garage names from lookup tables fetched alongside them. A second,
//! client-side filter narrows what is shown. New records pass an advisory
//! garage-capacity check computed from the locally loaded data only.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::operator::{report_failure, Operator};
use crate::clients::FleetApi;
use crate::dto::{
    CarFilters, DecoratedMaintenance, MaintenanceEditBuffer, MaintenanceFilters, MaintenanceLocalFilter, MonthlyReportFilter,
    MonthlyReportRow, NewMaintenanceForm,
};
use crate::models::{Car, EntityId, Garage, MaintenanceRecord};
use crate::utils::errors::{bad_request_error, not_found_error, validation_error, AppError, AppResult};

/// Attach display names to records (left join on car and garage ids).
pub fn decorate_records(
    records: Vec<MaintenanceRecord>,
    cars: &[Car],
    garages: &[Garage],
) -> Vec<DecoratedMaintenance> {
    let car_names: HashMap<&EntityId, Option<String>> = cars
        .iter()
        .filter_map(|car| car.id.as_ref().map(|id| (id, car.display_name())))
        .collect();
    let garage_names: HashMap<&EntityId, &str> = garages.iter().map(|g| (&g.id, g.name.as_str())).collect();

    records
        .into_iter()
        .map(|record| {
            let car_name = car_names.get(&record.car_id).cloned().flatten();
            let garage_name = garage_names
                .get(&record.garage_id)
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.to_string());
            DecoratedMaintenance::new(record, car_name, garage_name)
        })
        .collect()
}

/// Advisory capacity check against the records currently loaded.
///
/// Rejects when the garage is unknown or when the number of loaded records
/// for it has already reached its capacity.
pub fn check_garage_capacity<'a>(
    garage_id: &EntityId,
    garages: &'a [Garage],
    records: &[DecoratedMaintenance],
) -> AppResult<&'a Garage> {
    let garage = garages
        .iter()
        .find(|g| g.id.refers_to(garage_id))
        .ok_or_else(|| bad_request_error("Selected garage is not valid."))?;

    let current = records.iter().filter(|r| r.garage_id.refers_to(&garage.id)).count() as i64;
    if current >= garage.capacity {
        return Err(AppError::CapacityReached {
            garage_id: garage.id.to_string(),
            capacity: garage.capacity,
        });
    }
    Ok(garage)
}

pub struct MaintenanceView {
    api: Arc<dyn FleetApi>,
    operator: Arc<dyn Operator>,
    records: Vec<DecoratedMaintenance>,
    cars: Vec<Car>,
    garages: Vec<Garage>,
    server_filters: MaintenanceFilters,
    local_filter: MaintenanceLocalFilter,
    editing: Option<MaintenanceEditBuffer>,
    report: Vec<MonthlyReportRow>,
}

impl MaintenanceView {
    pub fn new(api: Arc<dyn FleetApi>, operator: Arc<dyn Operator>) -> Self {
        Self {
            api,
            operator,
            records: Vec::new(),
            cars: Vec::new(),
            garages: Vec::new(),
            server_filters: MaintenanceFilters::default(),
            local_filter: MaintenanceLocalFilter::default(),
            editing: None,
            report: Vec::new(),
        }
    }

    /// Every loaded record, before the local filter.
    pub fn records(&self) -> &[DecoratedMaintenance] {
        &self.records
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn garages(&self) -> &[Garage] {
        &self.garages
    }

    pub fn report(&self) -> &[MonthlyReportRow] {
        &self.report
    }

    pub fn editing(&self) -> Option<&MaintenanceEditBuffer> {
        self.editing.as_ref()
    }

    pub fn is_updating(&self) -> bool {
        self.editing.is_some()
    }

    /// Records that pass the local filter.
    pub fn visible(&self) -> Vec<&DecoratedMaintenance> {
        self.records.iter().filter(|r| self.local_filter.matches(r)).collect()
    }

    pub fn set_local_filter(&mut self, filter: MaintenanceLocalFilter) {
        self.local_filter = filter;
    }

    pub async fn set_server_filters(&mut self, filters: MaintenanceFilters) -> AppResult<()> {
        self.server_filters = filters;
        self.refresh().await
    }

    /// Fetch records, then garages and cars concurrently, and join them.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let fetched = self.fetch_decorated().await;
        match fetched {
            Ok((records, cars, garages)) => {
                info!("🔧 Loaded {} maintenance records", records.len());
                self.records = records;
                self.cars = cars;
                self.garages = garages;
                Ok(())
            }
            Err(e) => Err(report_failure(
                self.operator.as_ref(),
                "Error fetching maintenances",
                "An error occurred while fetching maintenance records.",
                e,
            )),
        }
    }

    async fn fetch_decorated(&self) -> AppResult<(Vec<DecoratedMaintenance>, Vec<Car>, Vec<Garage>)> {
        let records = self.api.list_maintenance(&self.server_filters).await?;
        let unfiltered = CarFilters::default();
        let (garages, cars) = futures::try_join!(self.api.list_garages(), self.api.list_cars(&unfiltered))?;
        let decorated = decorate_records(records, &cars, &garages);
        Ok((decorated, cars, garages))
    }

    pub async fn add_record(&mut self, form: &NewMaintenanceForm) -> AppResult<DecoratedMaintenance> {
        if !form.is_complete() {
            self.operator.alert("Please fill all fields.");
            return Err(validation_error("maintenance", "all fields are required"));
        }
        let request = form.to_request().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid maintenance form",
                "Please enter the scheduled date as YYYY-MM-DD.",
                e,
            )
        })?;

        match check_garage_capacity(&request.garage_id, &self.garages, &self.records) {
            Ok(garage) => info!(
                "🔧 Garage {} has room (capacity {})",
                garage.id, garage.capacity
            ),
            Err(e) => {
                let alert = match &e {
                    AppError::CapacityReached { capacity, .. } => {
                        format!("Cannot add maintenance. Garage capacity ({}) reached.", capacity)
                    }
                    _ => "Selected garage is not valid.".to_string(),
                };
                warn!("⚠️ Maintenance rejected locally: {}", e);
                self.operator.alert(&alert);
                return Err(e);
            }
        }

        let created = self.api.create_maintenance(&request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error adding record",
                "An error occurred while adding the record.",
                e,
            )
        })?;

        self.operator.alert("Record added successfully!");
        let decorated = decorate_records(vec![created], &self.cars, &self.garages)
            .into_iter()
            .next()
            .ok_or_else(|| bad_request_error("Server returned no record"))?;
        self.records.push(decorated.clone());
        Ok(decorated)
    }

    pub fn begin_edit(&mut self, id: &EntityId) -> AppResult<&mut MaintenanceEditBuffer> {
        let record = self
            .records
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| not_found_error("Maintenance record", id.as_str()))?;

        Ok(self.editing.insert(MaintenanceEditBuffer::from(record)))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn submit_edit(&mut self) -> AppResult<()> {
        let Some(buffer) = self.editing.as_ref() else {
            self.operator.alert("No maintenance record selected for update.");
            return Err(bad_request_error("No maintenance record selected for update."));
        };
        let request = buffer.to_request().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid maintenance update",
                "Please fill all fields.",
                e,
            )
        })?;

        info!("🔧 Updating maintenance record {}", request.id);
        self.api.update_maintenance(&request.id, &request).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error updating maintenance record",
                "An error occurred while updating the record.",
                e,
            )
        })?;

        self.operator.alert("Maintenance record updated successfully!");
        self.editing = None;
        self.refresh().await
    }

    /// Delete a record after confirmation. Returns `false` if the operator declined.
    pub async fn delete_record(&mut self, id: &EntityId) -> AppResult<bool> {
        if !self
            .operator
            .confirm("Are you sure you want to delete this maintenance request?")
        {
            info!("🔧 Deletion of maintenance record {} cancelled", id);
            return Ok(false);
        }

        self.api.delete_maintenance(id).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error deleting maintenance",
                "An error occurred while deleting the maintenance request.",
                e,
            )
        })?;

        self.operator.alert("Maintenance request deleted successfully!");
        if self.editing.as_ref().map(|b| &b.id) == Some(id) {
            self.editing = None;
        }
        self.refresh().await?;
        Ok(true)
    }

    /// Fetch the monthly request report for a garage and month range.
    ///
    /// An empty result clears the report and alerts; it is not an error.
    pub async fn generate_monthly_report(&mut self, filter: &MonthlyReportFilter) -> AppResult<&[MonthlyReportRow]> {
        if !filter.is_complete() {
            self.operator.alert("Please select all fields.");
            return Err(validation_error("monthlyReport", "garage, start month and end month are required"));
        }
        let query = filter.to_query().map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Invalid monthly report filter",
                "Please enter months as YYYY-MM.",
                e,
            )
        })?;

        info!(
            "📊 Requesting monthly report for garage {} ({} to {})",
            query.garage_id, query.start_month, query.end_month
        );
        let entries = self.api.monthly_requests_report(&query).await.map_err(|e| {
            report_failure(
                self.operator.as_ref(),
                "Error fetching monthly report",
                "An error occurred while fetching the monthly report.",
                e,
            )
        })?;

        self.report = entries.into_iter().map(MonthlyReportRow::from).collect();
        if self.report.is_empty() {
            self.operator.alert("No data available for the selected criteria.");
        }
        Ok(&self.report)
    }
}
