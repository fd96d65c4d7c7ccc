mod config;
mod db;
mod errors;
mod extract;
mod model;
mod openweather;
mod validate;

use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = config::Config::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting weather collector");
    info!("City: {}", config.city);
    info!(
        "Database: {}:{}/{}",
        config.db_host, config.db_port, config.db_name
    );

    if let Err(e) = run_cycle(&config).await {
        error!("Fetch cycle aborted: {}", e);
        std::process::exit(1);
    }
}

/// One fetch cycle: fetch, extract, validate, write. The database is only
/// touched once a fully validated record exists, so a failed fetch or a
/// partial response never writes anything.
async fn run_cycle(config: &config::Config) -> errors::Result<()> {
    let client = openweather::OpenWeatherClient::new(config.api_key.clone())?;
    let raw = client
        .fetch_current_with_retry(&config.city, config.retries)
        .await?;

    let record = extract::extract(raw)?;
    validate::validate(&record)?;

    info!(
        "Extracted weather for {}, {}: {} ({:.1} C, humidity {}%)",
        record.city, record.country, record.description, record.temperature_c, record.humidity_pct
    );

    let pool = db::make_pool(config.connect_options()).await?;
    db::insert_record(&pool, &record, config.retries).await?;

    info!("Stored weather record for {}", record.city);
    Ok(())
}
