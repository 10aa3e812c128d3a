//! Prevailing Wage Engine API server.
//!
//! Loads the rate table named by `RATE_CONFIG_DIR` and serves the costing
//! endpoints on `PORT`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use prevailing_wage_engine::api::{AppState, create_router};
use prevailing_wage_engine::config::ConfigLoader;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/california";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prevailing_wage_engine=info".parse()?),
        )
        .init();

    let config_dir =
        std::env::var("RATE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading rate table from {}", config_dir))?;

    let metadata = config.metadata();
    info!(
        rate_table = %metadata.name,
        version = %metadata.version,
        effective_date = %metadata.effective_date,
        crafts = config.table().crafts().count(),
        "Rate table loaded"
    );

    let app = create_router(AppState::new(config));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Prevailing Wage Engine API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
