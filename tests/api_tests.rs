//! End-to-end tests of the HTTP client and the views against a mock fleet
//! server built with axum.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};

use fleet_admin::clients::{FleetApi, FleetApiClient};
use fleet_admin::config::EnvironmentConfig;
use fleet_admin::dto::{
    CarFilters, DailyAvailabilityQuery, MonthlyReportFilter, NewCarForm, NewMaintenanceForm,
};
use fleet_admin::models::EntityId;
use fleet_admin::services::{CarView, GarageView, MaintenanceView, Operator};
use fleet_admin::utils::AppError;

/// A request as the mock server saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    path: String,
    query: Option<String>,
    body: Option<Value>,
}

#[derive(Default)]
struct MockFleet {
    routes: Mutex<HashMap<String, (StatusCode, String)>>,
    seen: Mutex<Vec<Seen>>,
}

impl MockFleet {
    fn respond(&self, method: &str, path: &str, status: StatusCode, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{} {}", method, path), (status, body.to_string()));
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn seen_for(&self, method: &str, path: &str) -> Vec<Seen> {
        self.seen()
            .into_iter()
            .filter(|s| s.method == method && s.path == path)
            .collect()
    }
}

async fn handle(State(mock): State<Arc<MockFleet>>, method: Method, uri: Uri, body: Bytes) -> (StatusCode, String) {
    let path = uri.path().to_string();
    mock.seen.lock().unwrap().push(Seen {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let key = format!("{} {}", method, path);
    match mock.routes.lock().unwrap().get(&key) {
        Some((status, body)) => (*status, body.clone()),
        None if method == Method::PUT || method == Method::DELETE => (StatusCode::NO_CONTENT, String::new()),
        None => (StatusCode::NOT_FOUND, json!({"error": "Not found"}).to_string()),
    }
}

async fn start_mock() -> (Arc<MockFleet>, Arc<dyn FleetApi>) {
    let mock = Arc::new(MockFleet::default());
    let app = Router::new().fallback(handle).with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = EnvironmentConfig::default()
        .with_api_url(&format!("http://{}/", addr))
        .unwrap()
        .with_timeout_secs(Some(5));
    let client: Arc<dyn FleetApi> = Arc::new(FleetApiClient::new(&config).unwrap());
    (mock, client)
}

/// Operator that answers every prompt the same way and records alerts.
#[derive(Default)]
struct RecordingOperator {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingOperator {
    fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            ..Default::default()
        })
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Operator for RecordingOperator {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

fn query_pairs(seen: &Seen) -> Vec<(String, String)> {
    seen.query
        .as_deref()
        .unwrap_or("")
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| {
            let (k, v) = p.split_once('=').unwrap_or((p, ""));
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_list_cars_sends_only_filled_filters() {
    let (mock, api) = start_mock().await;
    mock.respond(
        "GET",
        "/cars",
        StatusCode::OK,
        json!([
            {"id": 1, "make": "Toyota", "model": "Yaris", "productionYear": 2018,
             "licensePlate": "AB-123", "garageIds": [null]},
            {"id": "c-2", "make": "Toyota", "model": "Corolla", "productionYear": 2020,
             "licensePlate": "CD-456", "garageIds": [1, "2"]}
        ]),
    );

    let filters = CarFilters {
        make: Some("Toyota".to_string()),
        garage_id: None,
        from_year: Some(2015),
        to_year: None,
    };
    let cars = api.list_cars(&filters).await.unwrap();

    assert_eq!(cars.len(), 2);
    assert!(cars[0].garage_ids.is_empty());
    assert_eq!(cars[1].garage_ids, vec![EntityId::from(1), EntityId::from("2")]);

    let requests = mock.seen_for("GET", "/cars");
    assert_eq!(
        query_pairs(&requests[0]),
        vec![
            ("carMake".to_string(), "Toyota".to_string()),
            ("fromYear".to_string(), "2015".to_string())
        ]
    );
}

#[tokio::test]
async fn test_api_errors_keep_status_and_message() {
    let (mock, api) = start_mock().await;
    mock.respond(
        "GET",
        "/garages",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "Failed to fetch garages", "details": "database is locked"}),
    );

    match api.list_garages().await {
        Err(AppError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch garages: database is locked");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_car_posts_numeric_year_and_garage_ids() {
    let (mock, api) = start_mock().await;
    mock.respond("GET", "/cars", StatusCode::OK, json!([]));
    mock.respond("GET", "/garages", StatusCode::OK, json!([{"id": 3, "name": "North", "capacity": 2}]));
    mock.respond(
        "POST",
        "/cars",
        StatusCode::CREATED,
        json!({"id": 10, "make": "Skoda", "model": "Fabia", "productionYear": 2017,
               "licensePlate": "PB0000AA", "garageIds": [3]}),
    );

    let operator = RecordingOperator::answering(true);
    let mut view = CarView::new(api, operator.clone());
    view.refresh().await.unwrap();

    let form = NewCarForm {
        make: "Skoda".to_string(),
        model: "Fabia".to_string(),
        production_year: "2017".to_string(),
        license_plate: "PB0000AA".to_string(),
        garage_ids: vec!["3".to_string()],
    };
    let car = view.add_car(&form).await.unwrap();

    assert_eq!(car.id, Some(EntityId::from(10)));
    assert_eq!(view.cars().len(), 1);
    let posted = mock.seen_for("POST", "/cars");
    assert_eq!(
        posted[0].body,
        Some(json!({"make": "Skoda", "model": "Fabia", "productionYear": 2017,
                    "licensePlate": "PB0000AA", "garageIds": [3]}))
    );
    assert_eq!(operator.alerts(), vec!["Car added successfully!".to_string()]);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let (mock, api) = start_mock().await;
    let operator = RecordingOperator::answering(false);
    let mut view = CarView::new(api, operator.clone());

    let deleted = view.delete_car(&EntityId::from(4)).await.unwrap();

    assert!(!deleted);
    assert!(mock.seen_for("DELETE", "/cars/4").is_empty());
    assert_eq!(
        operator.prompts.lock().unwrap().clone(),
        vec!["Are you sure you want to delete this car?".to_string()]
    );
}

#[tokio::test]
async fn test_maintenance_capacity_blocks_post() {
    let (mock, api) = start_mock().await;
    mock.respond(
        "GET",
        "/maintenance",
        StatusCode::OK,
        json!([{"id": 100, "serviceType": "Oil", "scheduledDate": "2024-03-01", "carId": 1, "garageId": 5}]),
    );
    mock.respond("GET", "/garages", StatusCode::OK, json!([{"id": 5, "name": "Tiny", "capacity": 1}]));
    mock.respond("GET", "/cars", StatusCode::OK, json!([{"id": 1, "make": "Ford", "model": "Ka"}]));

    let operator = RecordingOperator::answering(true);
    let mut view = MaintenanceView::new(api, operator.clone());
    view.refresh().await.unwrap();
    assert_eq!(view.records()[0].car_name, "Ford Ka");
    assert_eq!(view.records()[0].garage_name, "Tiny");

    let form = NewMaintenanceForm::new("Brakes", "2024-03-02", "5", "1");
    let err = view.add_record(&form).await.unwrap_err();

    assert!(matches!(err, AppError::CapacityReached { capacity: 1, .. }));
    assert!(mock.seen_for("POST", "/maintenance").is_empty());
    assert_eq!(
        operator.alerts(),
        vec!["Cannot add maintenance. Garage capacity (1) reached.".to_string()]
    );
}

#[tokio::test]
async fn test_maintenance_add_posts_when_garage_has_room() {
    let (mock, api) = start_mock().await;
    mock.respond("GET", "/maintenance", StatusCode::OK, json!([]));
    mock.respond("GET", "/garages", StatusCode::OK, json!([{"id": 5, "name": "Main", "capacity": 3}]));
    mock.respond("GET", "/cars", StatusCode::OK, json!([{"id": "c-1", "make": "Ford", "model": "Ka"}]));
    mock.respond(
        "POST",
        "/maintenance",
        StatusCode::CREATED,
        json!({"id": 200, "serviceType": "Brakes", "scheduledDate": "2024-03-02", "carId": "c-1", "garageId": 5}),
    );

    let operator = RecordingOperator::answering(true);
    let mut view = MaintenanceView::new(api, operator.clone());
    view.refresh().await.unwrap();

    let record = view
        .add_record(&NewMaintenanceForm::new("Brakes", "2024-03-02", "5", "c-1"))
        .await
        .unwrap();

    assert_eq!(record.garage_name, "Main");
    assert_eq!(record.car_name, "Ford Ka");
    let posted = mock.seen_for("POST", "/maintenance");
    assert_eq!(
        posted[0].body,
        Some(json!({"serviceType": "Brakes", "scheduledDate": "2024-03-02", "garageId": "5", "carId": "c-1"}))
    );
}

#[tokio::test]
async fn test_monthly_report_reads_structured_months() {
    let (mock, api) = start_mock().await;
    mock.respond(
        "GET",
        "/maintenance/monthlyRequestsReport",
        StatusCode::OK,
        json!([
            {"yearMonth": {"year": 2024, "month": "JANUARY", "monthValue": 1, "leapYear": true}, "requests": 4},
            {"yearMonth": "2024-02", "requests": 0}
        ]),
    );

    let operator = RecordingOperator::answering(true);
    let mut view = MaintenanceView::new(api, operator.clone());
    let rows = view
        .generate_monthly_report(&MonthlyReportFilter::new("2", "2024-01", "2024-02"))
        .await
        .unwrap()
        .to_vec();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].year_month, "2024-01");
    assert_eq!(rows[0].requests, 4);
    assert_eq!(rows[1].year_month, "2024-02");

    let requests = mock.seen_for("GET", "/maintenance/monthlyRequestsReport");
    assert_eq!(
        query_pairs(&requests[0]),
        vec![
            ("garageId".to_string(), "2".to_string()),
            ("startMonth".to_string(), "2024-01".to_string()),
            ("endMonth".to_string(), "2024-02".to_string())
        ]
    );
    assert!(operator.alerts().is_empty());
}

#[tokio::test]
async fn test_daily_availability_query_and_empty_result() {
    let (mock, api) = start_mock().await;
    mock.respond("GET", "/garages/dailyAvailabilityReport", StatusCode::OK, json!([]));

    let operator = RecordingOperator::answering(true);
    let view = GarageView::new(api, operator.clone());
    let query = DailyAvailabilityQuery::new(
        EntityId::from(3),
        "2024-03-01".parse().unwrap(),
        "2024-03-03".parse().unwrap(),
    )
    .unwrap();

    let entries = view.daily_availability(&query).await.unwrap();

    assert!(entries.is_empty());
    let requests = mock.seen_for("GET", "/garages/dailyAvailabilityReport");
    assert_eq!(
        query_pairs(&requests[0]),
        vec![
            ("garageId".to_string(), "3".to_string()),
            ("startDate".to_string(), "2024-03-01".to_string()),
            ("endDate".to_string(), "2024-03-03".to_string())
        ]
    );
    assert_eq!(
        operator.alerts(),
        vec!["No data available for the selected criteria.".to_string()]
    );
}

#[tokio::test]
async fn test_string_ids_are_path_encoded() {
    let (mock, api) = start_mock().await;

    api.delete_garage(&EntityId::from("north/1")).await.unwrap();

    let seen = mock.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "DELETE");
    assert_eq!(seen[0].path, "/garages/north%2F1");
}
