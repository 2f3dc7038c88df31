//! Admin client for the fleet service: cars, garages, maintenance
//! scheduling and the availability and monthly request reports.

pub mod cli;
pub mod clients;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod utils;
