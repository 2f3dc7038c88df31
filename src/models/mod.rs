//! Data models of the fleet API
//!
//! Entities exactly as the REST service returns them.

pub mod car;
pub mod garage;
pub mod id;
pub mod maintenance;
pub mod report;

pub use car::Car;
pub use garage::{DailyAvailabilityEntry, Garage};
pub use id::{numeric_id_list, EntityId};
pub use maintenance::MaintenanceRecord;
pub use report::{MonthlyReportEntry, YearMonth};
