use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleet_admin::cli::Cli;

#[tokio::main]
async fn main() {
    // Load variables from .env, if present
    dotenv().ok();

    // Logs go to stderr so tables on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fleet_admin=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🚗 Fleet admin client");

    if let Err(e) = Cli::parse().run().await {
        error!("❌ {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
