//! Request, filter and view-row types
//!
//! Everything the views send to the fleet API or show to the operator, as
//! opposed to the raw entities in `models`.

pub mod car_dto;
pub mod garage_dto;
pub mod maintenance_dto;
pub mod report_dto;

pub use car_dto::*;
pub use garage_dto::*;
pub use maintenance_dto::*;
pub use report_dto::*;

/// Query string pairs, in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// Push `value` under `key` unless it is missing or blank.
pub(crate) fn push_param<T: ToString>(params: &mut QueryParams, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        let value = value.to_string();
        let value = value.trim();
        if !value.is_empty() {
            params.push((key, value.to_string()));
        }
    }
}
