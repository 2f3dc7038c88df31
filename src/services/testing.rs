//! In-memory fleet API and scripted operator for view tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::operator::Operator;
use crate::clients::FleetApi;
use crate::dto::{
    CarFilters, CreateCarRequest, CreateGarageRequest, CreateMaintenanceRequest, DailyAvailabilityQuery,
    MaintenanceFilters, MonthlyReportQuery, QueryParams, UpdateCarRequest, UpdateGarageRequest,
    UpdateMaintenanceRequest,
};
use crate::models::{Car, DailyAvailabilityEntry, EntityId, Garage, MaintenanceRecord, MonthlyReportEntry};
use crate::utils::errors::{AppError, AppResult};

pub fn car(id: i64, make: &str, model: &str) -> Car {
    Car {
        id: Some(EntityId::from(id)),
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        production_year: Some(2020),
        license_plate: Some(format!("PLATE-{}", id)),
        garage_ids: Vec::new(),
        garages: None,
    }
}

pub fn garage(id: i64, name: &str, capacity: i64) -> Garage {
    Garage {
        id: EntityId::from(id),
        name: name.to_string(),
        location: None,
        city: None,
        capacity,
    }
}

pub fn record(id: i64, car_id: i64, garage_id: i64, date: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        id: EntityId::from(id),
        service_type: "Oil change".to_string(),
        scheduled_date: date.to_string(),
        car_id: EntityId::from(car_id),
        garage_id: EntityId::from(garage_id),
        car_name: None,
        garage_name: None,
    }
}

#[derive(Default)]
struct FakeState {
    cars: Vec<Car>,
    garages: Vec<Garage>,
    maintenance: Vec<MaintenanceRecord>,
    report: Vec<MonthlyReportEntry>,
    availability: Vec<DailyAvailabilityEntry>,
    calls: Vec<String>,
    car_queries: Vec<QueryParams>,
    maintenance_queries: Vec<QueryParams>,
    fail_status: Option<u16>,
    next_id: i64,
}

/// Records every call; list endpoints ignore filters apart from recording them.
#[derive(Default)]
pub struct FakeFleetApi {
    state: Mutex<FakeState>,
}

impl FakeFleetApi {
    pub fn seed_cars(&self, cars: Vec<Car>) {
        self.state.lock().unwrap().cars = cars;
    }

    pub fn seed_garages(&self, garages: Vec<Garage>) {
        self.state.lock().unwrap().garages = garages;
    }

    pub fn seed_maintenance(&self, records: Vec<MaintenanceRecord>) {
        self.state.lock().unwrap().maintenance = records;
    }

    pub fn seed_report(&self, entries: Vec<MonthlyReportEntry>) {
        self.state.lock().unwrap().report = entries;
    }

    pub fn seed_availability(&self, entries: Vec<DailyAvailabilityEntry>) {
        self.state.lock().unwrap().availability = entries;
    }

    pub fn fail_with(&self, status: u16) {
        self.state.lock().unwrap().fail_status = Some(status);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn car_queries(&self) -> Vec<QueryParams> {
        self.state.lock().unwrap().car_queries.clone()
    }

    pub fn maintenance_queries(&self) -> Vec<QueryParams> {
        self.state.lock().unwrap().maintenance_queries.clone()
    }

    pub fn garages(&self) -> Vec<Garage> {
        self.state.lock().unwrap().garages.clone()
    }

    fn begin(&self, call: String) -> AppResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_status {
            Some(status) => Err(AppError::Api {
                status,
                message: "fake failure".to_string(),
            }),
            None => Ok(state),
        }
    }
}

impl FakeState {
    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId::from(1000 + self.next_id)
    }
}

#[async_trait]
impl FleetApi for FakeFleetApi {
    async fn list_cars(&self, filters: &CarFilters) -> AppResult<Vec<Car>> {
        let mut state = self.begin("list_cars".to_string())?;
        state.car_queries.push(filters.to_query());
        Ok(state.cars.clone())
    }

    async fn create_car(&self, request: &CreateCarRequest) -> AppResult<Car> {
        let mut state = self.begin("create_car".to_string())?;
        let car = Car {
            id: Some(state.next_id()),
            make: Some(request.make.clone()),
            model: Some(request.model.clone()),
            production_year: Some(request.production_year),
            license_plate: Some(request.license_plate.clone()),
            garage_ids: request.garage_ids.clone(),
            garages: None,
        };
        state.cars.push(car.clone());
        Ok(car)
    }

    async fn update_car(&self, id: &EntityId, request: &UpdateCarRequest) -> AppResult<()> {
        let mut state = self.begin(format!("update_car {}", id))?;
        if let Some(car) = state.cars.iter_mut().find(|c| c.id.as_ref() == Some(id)) {
            car.make = Some(request.make.clone());
            car.model = Some(request.model.clone());
            car.production_year = request.production_year;
            car.license_plate = Some(request.license_plate.clone());
            car.garage_ids = request.garage_ids.clone();
        }
        Ok(())
    }

    async fn delete_car(&self, id: &EntityId) -> AppResult<()> {
        let mut state = self.begin(format!("delete_car {}", id))?;
        state.cars.retain(|c| c.id.as_ref() != Some(id));
        Ok(())
    }

    async fn list_garages(&self) -> AppResult<Vec<Garage>> {
        let state = self.begin("list_garages".to_string())?;
        Ok(state.garages.clone())
    }

    async fn create_garage(&self, request: &CreateGarageRequest) -> AppResult<Garage> {
        let mut state = self.begin("create_garage".to_string())?;
        let garage = Garage {
            id: state.next_id(),
            name: request.name.clone(),
            location: Some(request.location.clone()),
            city: Some(request.city.clone()),
            capacity: request.capacity,
        };
        state.garages.push(garage.clone());
        Ok(garage)
    }

    async fn update_garage(&self, id: &EntityId, request: &UpdateGarageRequest) -> AppResult<()> {
        let mut state = self.begin(format!("update_garage {}", id))?;
        if let Some(garage) = state.garages.iter_mut().find(|g| &g.id == id) {
            if let Some(name) = &request.name {
                garage.name = name.clone();
            }
            if let Some(capacity) = request.capacity {
                garage.capacity = capacity;
            }
        }
        Ok(())
    }

    async fn delete_garage(&self, id: &EntityId) -> AppResult<()> {
        let mut state = self.begin(format!("delete_garage {}", id))?;
        state.garages.retain(|g| &g.id != id);
        Ok(())
    }

    async fn daily_availability_report(
        &self,
        query: &DailyAvailabilityQuery,
    ) -> AppResult<Vec<DailyAvailabilityEntry>> {
        let state = self.begin(format!("daily_availability_report {}", query.garage_id))?;
        Ok(state.availability.clone())
    }

    async fn list_maintenance(&self, filters: &MaintenanceFilters) -> AppResult<Vec<MaintenanceRecord>> {
        let mut state = self.begin("list_maintenance".to_string())?;
        state.maintenance_queries.push(filters.to_query());
        Ok(state.maintenance.clone())
    }

    async fn create_maintenance(&self, request: &CreateMaintenanceRequest) -> AppResult<MaintenanceRecord> {
        let mut state = self.begin("create_maintenance".to_string())?;
        let record = MaintenanceRecord {
            id: state.next_id(),
            service_type: request.service_type.clone(),
            scheduled_date: request.scheduled_date.clone(),
            car_id: request.car_id.clone(),
            garage_id: request.garage_id.clone(),
            car_name: None,
            garage_name: None,
        };
        state.maintenance.push(record.clone());
        Ok(record)
    }

    async fn update_maintenance(&self, id: &EntityId, request: &UpdateMaintenanceRequest) -> AppResult<()> {
        let mut state = self.begin(format!("update_maintenance {}", id))?;
        if let Some(record) = state.maintenance.iter_mut().find(|r| &r.id == id) {
            record.service_type = request.service_type.clone();
            record.scheduled_date = request.scheduled_date.clone();
            record.car_id = request.car_id.clone();
            record.garage_id = request.garage_id.clone();
        }
        Ok(())
    }

    async fn delete_maintenance(&self, id: &EntityId) -> AppResult<()> {
        let mut state = self.begin(format!("delete_maintenance {}", id))?;
        state.maintenance.retain(|r| &r.id != id);
        Ok(())
    }

    async fn monthly_requests_report(&self, query: &MonthlyReportQuery) -> AppResult<Vec<MonthlyReportEntry>> {
        let state = self.begin(format!("monthly_requests_report {}", query.garage_id))?;
        Ok(state.report.clone())
    }
}

/// Answers every confirmation with a fixed value and keeps the alerts.
pub struct ScriptedOperator {
    answer: AtomicBool,
    confirmations: AtomicUsize,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedOperator {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            confirmations: AtomicUsize::new(0),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn confirmations(&self) -> usize {
        self.confirmations.load(Ordering::SeqCst)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Operator for ScriptedOperator {
    fn confirm(&self, _question: &str) -> bool {
        self.confirmations.fetch_add(1, Ordering::SeqCst);
        self.answer.load(Ordering::SeqCst)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
