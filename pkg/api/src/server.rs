use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::AppState;
use crate::handlers::{convert, pages};
use crate::request_id::request_id_middleware;

/// Server configuration passed from the binary's CLI.
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub default_secret_name: String,
    pub default_namespace: String,
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState {
        default_secret_name: config.default_secret_name,
        default_namespace: config.default_namespace,
    };

    let app = Router::new()
        .route("/", get(pages::index))
        .route("/healthz", get(pages::healthz))
        .route("/api/v1/convert", post(convert::convert))
        .route("/api/v1/convert/download", post(convert::download))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state);

    info!("Starting API server on {}", config.addr);
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
