use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::models::StatusResult;
use crate::prober::{self, SOCKET_TIMEOUT};
use crate::render;

/// Every hit runs a fresh probe cycle; nothing is cached between requests.
async fn landing_page(State(config): State<Arc<AppConfig>>) -> impl IntoResponse {
    let statuses = prober::probe_all(&config.targets, SOCKET_TIMEOUT).await;
    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(render::render_html(&statuses)),
    )
}

async fn status_json(State(config): State<Arc<AppConfig>>) -> Json<Vec<StatusResult>> {
    Json(prober::probe_all(&config.targets, SOCKET_TIMEOUT).await)
}

pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/status.json", get(status_json))
        .with_state(config)
}

pub async fn start_server(config: Arc<AppConfig>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let app = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind port {}", addr.port()))?;
    info!("Landing page up on port {}", addr.port());
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
