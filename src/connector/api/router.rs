use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use super::container::Container;
use super::controller::{handle_prompt, health};

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/api/prompt", post(handle_prompt))
        .route("/health", get(health))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let app = build_router(container);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("promptrelay listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
