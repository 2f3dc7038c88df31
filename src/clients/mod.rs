//! Clients - HTTP clients for the fleet REST API

pub mod fleet_client;

pub use fleet_client::{FleetApi, FleetApiClient};
