use serde::Serialize;

use super::{push_param, QueryParams};
use crate::dto::maintenance_dto::UNKNOWN_NAME;
use crate::models::{EntityId, MonthlyReportEntry};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_year_month;

/// Monthly report form: garage plus a `YYYY-MM` month range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyReportFilter {
    pub garage_id: String,
    pub start_month: String,
    pub end_month: String,
}

impl MonthlyReportFilter {
    pub fn new(garage_id: &str, start_month: &str, end_month: &str) -> Self {
        Self {
            garage_id: garage_id.trim().to_string(),
            start_month: start_month.trim().to_string(),
            end_month: end_month.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.garage_id.is_empty() && !self.start_month.is_empty() && !self.end_month.is_empty()
    }

    pub fn to_query(&self) -> AppResult<MonthlyReportQuery> {
        if !self.is_complete() {
            return Err(validation_error("monthlyReport", "garage, start month and end month are required"));
        }
        validate_year_month(&self.start_month)
            .map_err(|_| validation_error("startMonth", "must be a YYYY-MM month"))?;
        validate_year_month(&self.end_month)
            .map_err(|_| validation_error("endMonth", "must be a YYYY-MM month"))?;

        Ok(MonthlyReportQuery {
            garage_id: EntityId::new(self.garage_id.as_str()),
            start_month: self.start_month.clone(),
            end_month: self.end_month.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReportQuery {
    pub garage_id: EntityId,
    pub start_month: String,
    pub end_month: String,
}

impl MonthlyReportQuery {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_param(&mut params, "garageId", Some(&self.garage_id));
        push_param(&mut params, "startMonth", Some(self.start_month.as_str()));
        push_param(&mut params, "endMonth", Some(self.end_month.as_str()));
        params
    }
}

/// A report entry ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportRow {
    pub year_month: String,
    pub requests: i64,
}

impl From<MonthlyReportEntry> for MonthlyReportRow {
    fn from(entry: MonthlyReportEntry) -> Self {
        Self {
            year_month: entry
                .year_month
                .map(|ym| ym.label())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            requests: entry.requests.unwrap_or(0),
        }
    }
}
