//! Plain-text tables for the terminal.

use colored::Colorize;

use crate::dto::{DecoratedMaintenance, MonthlyReportRow, UNKNOWN_NAME};
use crate::models::{Car, DailyAvailabilityEntry, Garage};

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w).bold().to_string())
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Cars with the names of their garages, resolved from `garages` when the
/// backend did not expand them.
pub fn cars_table(cars: &[Car], garages: &[Garage]) -> String {
    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            let garage_names: Vec<String> = car
                .associated_garage_ids()
                .iter()
                .map(|id| {
                    car.garages
                        .iter()
                        .flatten()
                        .chain(garages.iter())
                        .find(|g| &g.id == id)
                        .map(|g| g.name.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect();
            vec![
                car.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                or_na(car.make.as_deref()),
                or_na(car.model.as_deref()),
                car.production_year.map(|y| y.to_string()).unwrap_or_default(),
                or_na(car.license_plate.as_deref()),
                if garage_names.is_empty() {
                    "No garages".to_string()
                } else {
                    garage_names.join(", ")
                },
            ]
        })
        .collect();
    table(&["ID", "Make", "Model", "Year", "License plate", "Garages"], &rows)
}

pub fn garages_table(garages: &[Garage]) -> String {
    let rows: Vec<Vec<String>> = garages
        .iter()
        .map(|g| {
            vec![
                g.id.to_string(),
                g.name.clone(),
                or_na(g.location.as_deref()),
                or_na(g.city.as_deref()),
                g.capacity.to_string(),
            ]
        })
        .collect();
    table(&["ID", "Name", "Location", "City", "Capacity"], &rows)
}

pub fn maintenance_table(records: &[&DecoratedMaintenance]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.car_name.clone(),
                r.service_type.clone(),
                r.scheduled_date.clone(),
                r.garage_name.clone(),
            ]
        })
        .collect();
    table(&["ID", "Car", "Service type", "Scheduled date", "Garage"], &rows)
}

pub fn monthly_report_table(rows: &[MonthlyReportRow]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.year_month.clone(), r.requests.to_string()])
        .collect();
    table(&["Month", "Requests"], &rows)
}

pub fn availability_table(entries: &[DailyAvailabilityEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.date.clone(),
                e.requests.to_string(),
                e.available_capacity.to_string(),
            ]
        })
        .collect();
    table(&["Date", "Requests", "Available capacity"], &rows)
}
