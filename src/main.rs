mod app;
mod config;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::DashboardConfig;
use crate::logging::LoggingConfig;
use crate::services::csv_loader_service;
use crate::state::AppState;
use crate::store::PriceHistory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = DashboardConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let records = csv_loader_service::load_records(&config.data_path)
        .with_context(|| format!("Failed to load price data from {:?}", config.data_path))?;
    let history = PriceHistory::new(records);
    if let Some(bounds) = history.bounds() {
        tracing::info!(
            "📈 {} rows of {} data from {} to {}",
            history.len(),
            config.symbol,
            bounds.min_date,
            bounds.max_date
        );
    }

    let bind_addr = config.bind_addr();
    let state = AppState {
        history,
        config: Arc::new(config),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("🚀 Stock dashboard running at http://{}/", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
