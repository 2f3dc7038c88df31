//! `fleet-admin maintenance ...`

use std::sync::Arc;

use anyhow::Result;

use crate::cli::render::{maintenance_table, monthly_report_table};
use crate::cli::MaintenanceCommand;
use crate::clients::FleetApi;
use crate::dto::{MaintenanceFilters, MaintenanceLocalFilter, MonthlyReportFilter, NewMaintenanceForm};
use crate::services::{MaintenanceView, Operator};

pub async fn run_maintenance(
    cmd: MaintenanceCommand,
    api: Arc<dyn FleetApi>,
    operator: Arc<dyn Operator>,
) -> Result<()> {
    let mut view = MaintenanceView::new(api, operator);

    match cmd {
        MaintenanceCommand::List {
            car,
            garage,
            date,
            show_car,
            show_garage,
            from,
            to,
        } => {
            view.set_server_filters(MaintenanceFilters {
                car_id: car,
                garage_id: garage,
                scheduled_date: date,
            })
            .await?;
            view.set_local_filter(MaintenanceLocalFilter {
                car_id: show_car,
                garage_id: show_garage,
                start_date: from,
                end_date: to,
            });
            print!("{}", maintenance_table(&view.visible()));
        }
        MaintenanceCommand::Add {
            service,
            date,
            car,
            garage,
        } => {
            // The capacity check counts the records already loaded.
            view.refresh().await?;
            let form = NewMaintenanceForm::new(&service, &date, &garage, &car);
            let record = view.add_record(&form).await?;
            print!("{}", maintenance_table(&[&record]));
        }
        MaintenanceCommand::Edit {
            id,
            service,
            date,
            car,
            garage,
        } => {
            view.refresh().await?;
            let buffer = view.begin_edit(&id)?;
            if let Some(service) = service {
                buffer.service_type = service;
            }
            if let Some(date) = date {
                buffer.scheduled_date = date;
            }
            if let Some(car) = car {
                buffer.car_id = car;
            }
            if let Some(garage) = garage {
                buffer.garage_id = garage;
            }
            view.submit_edit().await?;
            print!("{}", maintenance_table(&view.visible()));
        }
        MaintenanceCommand::Delete { id } => {
            if view.delete_record(&id).await? {
                println!("Removed maintenance record {id}");
            }
        }
        MaintenanceCommand::Report { garage, start, end } => {
            let filter = MonthlyReportFilter::new(&garage, &start, &end);
            let rows = view.generate_monthly_report(&filter).await?;
            if !rows.is_empty() {
                print!("{}", monthly_report_table(rows));
            }
        }
    }

    Ok(())
}
