//! CLI for the fleet admin client.

mod commands;
pub mod console;
pub mod render;

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::clients::{FleetApi, FleetApiClient};
use crate::config::EnvironmentConfig;
use crate::models::EntityId;
use crate::services::Operator;
use commands::{run_cars, run_garages, run_maintenance};
use console::ConsoleOperator;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fleet-admin")]
#[command(about = "Manage the cars, garages and maintenance records of the fleet service", long_about = None)]
pub struct Cli {
    /// Base URL of the fleet REST API (overrides FLEET_API_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides FLEET_HTTP_TIMEOUT_SECS).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Answer yes to every confirmation prompt.
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List, add, edit and delete cars.
    #[command(subcommand)]
    Cars(CarCommand),

    /// List, add, edit and delete garages.
    #[command(subcommand)]
    Garages(GarageCommand),

    /// Manage maintenance records and reports.
    #[command(subcommand)]
    Maintenance(MaintenanceCommand),
}

#[derive(Debug, Subcommand)]
pub enum CarCommand {
    /// Show cars, optionally filtered server-side.
    List {
        #[arg(long)]
        make: Option<String>,
        /// Only cars serviced by this garage.
        #[arg(long, value_name = "ID")]
        garage: Option<EntityId>,
        #[arg(long, value_name = "YEAR")]
        from_year: Option<i32>,
        #[arg(long, value_name = "YEAR")]
        to_year: Option<i32>,
    },

    /// Add a car.
    Add {
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        /// Production year.
        #[arg(long)]
        year: String,
        #[arg(long)]
        plate: String,
        /// Garage id; repeat for several garages.
        #[arg(long = "garage", value_name = "ID")]
        garages: Vec<String>,
    },

    /// Edit a car; fields not given keep their current value.
    Edit {
        id: EntityId,
        #[arg(long)]
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        plate: Option<String>,
        /// Replace the garage list; repeat for several garages.
        #[arg(long = "garage", value_name = "ID")]
        garages: Vec<EntityId>,
    },

    /// Delete a car.
    Delete { id: EntityId },
}

#[derive(Debug, Subcommand)]
pub enum GarageCommand {
    /// Show all garages.
    List,

    /// Add a garage.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        capacity: i64,
    },

    /// Edit a garage; fields not given keep their current value.
    Edit {
        id: EntityId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        capacity: Option<i64>,
    },

    /// Delete a garage.
    Delete { id: EntityId },

    /// Per-day request count and remaining capacity of a garage.
    Availability {
        #[arg(long, value_name = "ID")]
        garage: EntityId,
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: NaiveDate,
        #[arg(long, value_name = "YYYY-MM-DD")]
        end: NaiveDate,
    },
}

#[derive(Debug, Subcommand)]
pub enum MaintenanceCommand {
    /// Show maintenance records.
    List {
        /// Server-side car filter.
        #[arg(long, value_name = "ID")]
        car: Option<EntityId>,
        /// Server-side garage filter.
        #[arg(long, value_name = "ID")]
        garage: Option<EntityId>,
        /// Server-side scheduled date filter.
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
        /// Local filter: only this car.
        #[arg(long, value_name = "ID")]
        show_car: Option<EntityId>,
        /// Local filter: only this garage.
        #[arg(long, value_name = "ID")]
        show_garage: Option<EntityId>,
        /// Local filter: scheduled on or after this date.
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<NaiveDate>,
        /// Local filter: scheduled on or before this date.
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<NaiveDate>,
    },

    /// Schedule a maintenance record, subject to the garage capacity check.
    Add {
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "", value_name = "YYYY-MM-DD")]
        date: String,
        #[arg(long, default_value = "", value_name = "ID")]
        car: String,
        #[arg(long, default_value = "", value_name = "ID")]
        garage: String,
    },

    /// Edit a record; fields not given keep their current value.
    Edit {
        id: EntityId,
        #[arg(long)]
        service: Option<String>,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
        #[arg(long, value_name = "ID")]
        car: Option<EntityId>,
        #[arg(long, value_name = "ID")]
        garage: Option<EntityId>,
    },

    /// Delete a record.
    Delete { id: EntityId },

    /// Monthly request counts of a garage.
    Report {
        #[arg(long, default_value = "", value_name = "ID")]
        garage: String,
        #[arg(long, default_value = "", value_name = "YYYY-MM")]
        start: String,
        #[arg(long, default_value = "", value_name = "YYYY-MM")]
        end: String,
    },
}

impl Cli {
    /// Resolve configuration, build the client and dispatch.
    pub async fn run(self) -> Result<()> {
        let mut config = EnvironmentConfig::from_env()?.with_timeout_secs(self.timeout);
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url)?;
        }
        tracing::debug!("loaded config: {:?}", config);

        let api: Arc<dyn FleetApi> = Arc::new(FleetApiClient::new(&config)?);
        let operator: Arc<dyn Operator> = Arc::new(ConsoleOperator::new(self.yes));

        match self.command {
            CliCommand::Cars(cmd) => run_cars(cmd, api, operator).await?,
            CliCommand::Garages(cmd) => run_garages(cmd, api, operator).await?,
            CliCommand::Maintenance(cmd) => run_maintenance(cmd, api, operator).await?,
        }

        Ok(())
    }
}
