mod config;
mod db;
mod errors;
mod metrics;
mod model;
mod rest;

use axum::{routing::get, Router};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = config::Config::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting clima API");
    info!("HTTP server: {}", config.http_addr);
    info!(
        "Database: {}:{}/{}",
        config.db_host, config.db_port, config.db_name
    );

    // Initialize metrics
    metrics::init_metrics();

    // Connect to database
    let pool = match db::make_pool(config.connect_options()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Build HTTP app with the query routes and metrics endpoint
    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .merge(rest::create_router(pool));

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(&config.http_addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", config.http_addr, e);
            std::process::exit(1);
        });

    info!("HTTP server listening on {}", config.http_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap_or_else(|e| {
            error!("HTTP server error: {}", e);
        });
    });

    tokio::select! {
        _ = server_handle => {
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down");
}

async fn metrics_handler() -> String {
    metrics::gather_metrics()
}
