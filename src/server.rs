use anyhow::Context;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;

pub const PORT: u16 = 9000;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::root))
        .layer(TraceLayer::new_for_http())
}

pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Bind the health server on port 9000 and serve until the process exits.
pub async fn serve() -> anyhow::Result<()> {
    let listener = bind(&format!("0.0.0.0:{PORT}")).await?;

    info!("Medusa server running on port {}", PORT);
    info!("Health check available at http://localhost:{}/health", PORT);

    serve_on(listener).await
}

pub async fn serve_on(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, build_router())
        .await
        .context("health server terminated")
}
