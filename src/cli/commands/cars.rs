//! `fleet-admin cars ...`

use std::sync::Arc;

use anyhow::Result;

use crate::cli::render::cars_table;
use crate::cli::CarCommand;
use crate::clients::FleetApi;
use crate::dto::{CarFilters, NewCarForm};
use crate::services::{CarView, Operator};

pub async fn run_cars(cmd: CarCommand, api: Arc<dyn FleetApi>, operator: Arc<dyn Operator>) -> Result<()> {
    let mut view = CarView::new(api, operator);

    match cmd {
        CarCommand::List {
            make,
            garage,
            from_year,
            to_year,
        } => {
            view.set_filters(CarFilters {
                make,
                garage_id: garage,
                from_year,
                to_year,
            })
            .await?;
            print!("{}", cars_table(view.cars(), view.garages()));
        }
        CarCommand::Add {
            make,
            model,
            year,
            plate,
            garages,
        } => {
            let form = NewCarForm {
                make,
                model,
                production_year: year,
                license_plate: plate,
                garage_ids: garages,
            };
            let car = view.add_car(&form).await?;
            print!("{}", cars_table(&[car], view.garages()));
        }
        CarCommand::Edit {
            id,
            make,
            model,
            year,
            plate,
            garages,
        } => {
            view.refresh().await?;
            let buffer = view.begin_edit(&id)?;
            if let Some(make) = make {
                buffer.make = make;
            }
            if let Some(model) = model {
                buffer.model = model;
            }
            if year.is_some() {
                buffer.production_year = year;
            }
            if let Some(plate) = plate {
                buffer.license_plate = plate;
            }
            if !garages.is_empty() {
                buffer.garage_ids = garages;
            }
            view.submit_edit().await?;
            print!("{}", cars_table(view.cars(), view.garages()));
        }
        CarCommand::Delete { id } => {
            if view.delete_car(&id).await? {
                println!("Removed car {id}");
            }
        }
    }

    Ok(())
}
