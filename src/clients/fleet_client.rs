//! HTTP client for the fleet REST API
//!
//! [`FleetApi`] is the seam between the views and the network;
//! [`FleetApiClient`] implements it on top of `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::environment::EnvironmentConfig;
use crate::dto::{
    CarFilters, CreateCarRequest, CreateGarageRequest, CreateMaintenanceRequest, DailyAvailabilityQuery,
    MaintenanceFilters, MonthlyReportQuery, UpdateCarRequest, UpdateGarageRequest, UpdateMaintenanceRequest,
};
use crate::models::{Car, DailyAvailabilityEntry, EntityId, Garage, MaintenanceRecord, MonthlyReportEntry};
use crate::utils::errors::{AppError, AppResult};

/// Operations the views need from the fleet service
#[async_trait]
pub trait FleetApi: Send + Sync {
    async fn list_cars(&self, filters: &CarFilters) -> AppResult<Vec<Car>>;
    async fn create_car(&self, request: &CreateCarRequest) -> AppResult<Car>;
    async fn update_car(&self, id: &EntityId, request: &UpdateCarRequest) -> AppResult<()>;
    async fn delete_car(&self, id: &EntityId) -> AppResult<()>;

    async fn list_garages(&self) -> AppResult<Vec<Garage>>;
    async fn create_garage(&self, request: &CreateGarageRequest) -> AppResult<Garage>;
    async fn update_garage(&self, id: &EntityId, request: &UpdateGarageRequest) -> AppResult<()>;
    async fn delete_garage(&self, id: &EntityId) -> AppResult<()>;
    async fn daily_availability_report(
        &self,
        query: &DailyAvailabilityQuery,
    ) -> AppResult<Vec<DailyAvailabilityEntry>>;

    async fn list_maintenance(&self, filters: &MaintenanceFilters) -> AppResult<Vec<MaintenanceRecord>>;
    async fn create_maintenance(&self, request: &CreateMaintenanceRequest) -> AppResult<MaintenanceRecord>;
    async fn update_maintenance(&self, id: &EntityId, request: &UpdateMaintenanceRequest) -> AppResult<()>;
    async fn delete_maintenance(&self, id: &EntityId) -> AppResult<()>;
    async fn monthly_requests_report(&self, query: &MonthlyReportQuery) -> AppResult<Vec<MonthlyReportEntry>>;
}

/// Error body the backend sends with failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// `reqwest` implementation of [`FleetApi`]
#[derive(Debug, Clone)]
pub struct FleetApiClient {
    client: Client,
    base_url: String,
}

impl FleetApiClient {
    pub fn new(config: &EnvironmentConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn entity_url(&self, collection: &str, id: &EntityId) -> String {
        format!("{}/{}/{}", self.base_url, collection, urlencoding::encode(id.as_str()))
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            error!("❌ Request to fleet API failed: {}", e);
            AppError::Http(e)
        })?;

        let status = response.status();
        debug!("📥 {} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "request failed".to_string());
        error!("❌ Fleet API answered {}: {}", status.as_u16(), message);

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_discarding_body(&self, request: RequestBuilder) -> AppResult<()> {
        self.send(request).await?;
        Ok(())
    }
}

/// Pull a readable message out of an error body, JSON or plain text.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
        let headline = parsed.error.or(parsed.message);
        return match (headline, parsed.details) {
            (Some(h), Some(d)) => Some(format!("{}: {}", h, d)),
            (Some(h), None) => Some(h),
            (None, Some(d)) => Some(d),
            (None, None) => Some(trimmed.to_string()),
        };
    }
    // Plain text bodies and JSON strings.
    Some(trimmed.trim_matches('"').to_string())
}

#[async_trait]
impl FleetApi for FleetApiClient {
    async fn list_cars(&self, filters: &CarFilters) -> AppResult<Vec<Car>> {
        let query = filters.to_query();
        debug!("🚗 GET /cars {:?}", query);
        self.get_json(self.client.get(self.url("/cars")).query(&query)).await
    }

    async fn create_car(&self, request: &CreateCarRequest) -> AppResult<Car> {
        debug!("🚗 POST /cars {:?}", request);
        self.get_json(self.client.post(self.url("/cars")).json(request)).await
    }

    async fn update_car(&self, id: &EntityId, request: &UpdateCarRequest) -> AppResult<()> {
        debug!("🚗 PUT /cars/{} {:?}", id, request);
        self.send_discarding_body(self.client.put(self.entity_url("cars", id)).json(request))
            .await
    }

    async fn delete_car(&self, id: &EntityId) -> AppResult<()> {
        debug!("🚗 DELETE /cars/{}", id);
        self.send_discarding_body(self.client.delete(self.entity_url("cars", id)))
            .await
    }

    async fn list_garages(&self) -> AppResult<Vec<Garage>> {
        debug!("🏢 GET /garages");
        self.get_json(self.client.get(self.url("/garages"))).await
    }

    async fn create_garage(&self, request: &CreateGarageRequest) -> AppResult<Garage> {
        debug!("🏢 POST /garages {:?}", request);
        self.get_json(self.client.post(self.url("/garages")).json(request)).await
    }

    async fn update_garage(&self, id: &EntityId, request: &UpdateGarageRequest) -> AppResult<()> {
        debug!("🏢 PUT /garages/{} {:?}", id, request);
        self.send_discarding_body(self.client.put(self.entity_url("garages", id)).json(request))
            .await
    }

    async fn delete_garage(&self, id: &EntityId) -> AppResult<()> {
        debug!("🏢 DELETE /garages/{}", id);
        self.send_discarding_body(self.client.delete(self.entity_url("garages", id)))
            .await
    }

    async fn daily_availability_report(
        &self,
        query: &DailyAvailabilityQuery,
    ) -> AppResult<Vec<DailyAvailabilityEntry>> {
        let params = query.to_query();
        debug!("🏢 GET /garages/dailyAvailabilityReport {:?}", params);
        self.get_json(
            self.client
                .get(self.url("/garages/dailyAvailabilityReport"))
                .query(&params),
        )
        .await
    }

    async fn list_maintenance(&self, filters: &MaintenanceFilters) -> AppResult<Vec<MaintenanceRecord>> {
        let query = filters.to_query();
        debug!("🔧 GET /maintenance {:?}", query);
        self.get_json(self.client.get(self.url("/maintenance")).query(&query)).await
    }

    async fn create_maintenance(&self, request: &CreateMaintenanceRequest) -> AppResult<MaintenanceRecord> {
        debug!("🔧 POST /maintenance {:?}", request);
        self.get_json(self.client.post(self.url("/maintenance")).json(request)).await
    }

    async fn update_maintenance(&self, id: &EntityId, request: &UpdateMaintenanceRequest) -> AppResult<()> {
        debug!("🔧 PUT /maintenance/{} {:?}", id, request);
        self.send_discarding_body(self.client.put(self.entity_url("maintenance", id)).json(request))
            .await
    }

    async fn delete_maintenance(&self, id: &EntityId) -> AppResult<()> {
        debug!("🔧 DELETE /maintenance/{}", id);
        self.send_discarding_body(self.client.delete(self.entity_url("maintenance", id)))
            .await
    }

    async fn monthly_requests_report(&self, query: &MonthlyReportQuery) -> AppResult<Vec<MonthlyReportEntry>> {
        let params = query.to_query();
        debug!("📊 GET /maintenance/monthlyRequestsReport {:?}", params);
        self.get_json(
            self.client
                .get(self.url("/maintenance/monthlyRequestsReport"))
                .query(&params),
        )
        .await
    }
}
