mod api;
mod config;
mod error;
mod layout;
mod logger;
mod models;
mod page;
mod server;
mod week;

use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::api::ScheduleApi;
use crate::config::Config;
use crate::server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = Config::from_env().context("Failed to read configuration")?;

    tracing::info!(api = %config.api_base, "Starting schedule web service");

    let api = ScheduleApi::new(config.api_base.clone());
    let app = server::router(AppState { api });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %addr, "Listening for requests");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
