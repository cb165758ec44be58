use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use arena_status::api;
use arena_status::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into()))
        .with_ansi(true)
        .init();

    let config = Arc::new(AppConfig::from_env());
    info!("Watching {} servers", config.targets.len());

    let server_config = Arc::clone(&config);
    tokio::spawn(async move {
        if let Err(e) = api::start_server(server_config).await {
            tracing::error!("{:#}", e);
        }
    });

    signal::ctrl_c().await?;
    info!("Shutdown signal received.");

    Ok(())
}
