//! Validation helpers
//!
//! Helpers for checking form input before it is sent to the fleet API
//! and for converting the loosely typed strings the forms carry.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref YEAR_MONTH_RE: Regex = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
}

/// Validate and convert a `YYYY-MM-DD` string to a date.
///
/// A trailing time part (`2024-03-05T10:00`, `2024-03-05 10:00:00`) is
/// accepted and ignored, since scheduled dates may carry one.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    let rest = trimmed.get(10..).unwrap_or("");
    let rest_ok = rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ');

    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) if rest_ok => Ok(date),
        _ => {
            let mut error = ValidationError::new("date");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD".to_string());
            Err(error)
        }
    }
}

/// Validate a `YYYY-MM` month string
pub fn validate_year_month(value: &str) -> Result<(), ValidationError> {
    let valid = YEAR_MONTH_RE
        .captures(value.trim())
        .and_then(|caps| caps.get(2))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|month| (1..=12).contains(&month))
        .unwrap_or(false);

    if !valid {
        let mut error = ValidationError::new("year_month");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM".to_string());
        return Err(error);
    }
    Ok(())
}

/// Parse a production year typed into a form
pub fn parse_year(value: &str) -> Result<i32, ValidationError> {
    value.trim().parse::<i32>().map_err(|_| {
        let mut error = ValidationError::new("year");
        error.add_param("value".into(), &value.to_string());
        error
    })
}
