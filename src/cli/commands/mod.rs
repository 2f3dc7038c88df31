mod cars;
mod garages;
mod maintenance;

pub use cars::run_cars;
pub use garages::run_garages;
pub use maintenance::run_maintenance;
