//! Monthly request report model
//!
//! Depending on the backend, the month of an entry is either a flat label
//! (`"2024-03"`) or a structured year/month object
//! (`{"year": 2024, "monthValue": 3, ...}`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearMonth {
    Structured {
        year: i32,
        #[serde(rename = "monthValue")]
        month_value: u32,
    },
    Label(String),
}

impl YearMonth {
    /// `YYYY-MM` label; flat labels pass through unchanged.
    pub fn label(&self) -> String {
        match self {
            YearMonth::Structured { year, month_value } => format!("{}-{:02}", year, month_value),
            YearMonth::Label(label) => label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportEntry {
    #[serde(default)]
    pub year_month: Option<YearMonth>,
    #[serde(default, alias = "count")]
    pub requests: Option<i64>,
}
