//! Views
//!
//! Stateful car, garage and maintenance views. Each one owns the data it
//! shows and talks to the fleet API through [`crate::clients::FleetApi`].

pub mod car_service;
pub mod garage_service;
pub mod maintenance_service;
pub mod operator;

#[cfg(test)]
pub(crate) mod testing;

pub use car_service::CarView;
pub use garage_service::GarageView;
pub use maintenance_service::{check_garage_capacity, decorate_records, MaintenanceView};
pub use operator::Operator;
