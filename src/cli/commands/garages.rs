//! `fleet-admin garages ...`

use std::sync::Arc;

use anyhow::Result;

use crate::cli::render::{availability_table, garages_table};
use crate::cli::GarageCommand;
use crate::clients::FleetApi;
use crate::dto::{CreateGarageRequest, DailyAvailabilityQuery, UpdateGarageRequest};
use crate::services::{GarageView, Operator};

pub async fn run_garages(cmd: GarageCommand, api: Arc<dyn FleetApi>, operator: Arc<dyn Operator>) -> Result<()> {
    let mut view = GarageView::new(api, operator);

    match cmd {
        GarageCommand::List => {
            view.refresh().await?;
            print!("{}", garages_table(view.garages()));
        }
        GarageCommand::Add {
            name,
            location,
            city,
            capacity,
        } => {
            let garage = view
                .add_garage(&CreateGarageRequest {
                    name,
                    location,
                    city,
                    capacity,
                })
                .await?;
            print!("{}", garages_table(&[garage]));
        }
        GarageCommand::Edit {
            id,
            name,
            location,
            city,
            capacity,
        } => {
            let request = UpdateGarageRequest {
                name,
                location,
                city,
                capacity,
            };
            view.update_garage(&id, &request).await?;
            print!("{}", garages_table(view.garages()));
        }
        GarageCommand::Delete { id } => {
            if view.delete_garage(&id).await? {
                println!("Removed garage {id}");
            }
        }
        GarageCommand::Availability { garage, start, end } => {
            let query = DailyAvailabilityQuery::new(garage, start, end)?;
            let entries = view.daily_availability(&query).await?;
            if !entries.is_empty() {
                print!("{}", availability_table(&entries));
            }
        }
    }

    Ok(())
}
