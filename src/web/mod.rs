//! HTTP presentation of the dashboard.
//!
//! `GET /` serves the page with both charts as inline SVG; the `/api/*`
//! routes expose the same views as JSON.

pub mod page;
pub mod routes;
pub mod svg;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::data::model::LaunchDataset;

/// Creates the router. The dataset is shared read-only by every handler.
pub fn create_router(dataset: Arc<LaunchDataset>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard))
        .route("/api/options", get(routes::options))
        .route("/api/pie", get(routes::pie))
        .route("/api/scatter", get(routes::scatter))
        .with_state(dataset)
}

/// Bind `addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, dataset: Arc<LaunchDataset>) -> std::io::Result<()> {
    let app = create_router(dataset);
    let listener = TcpListener::bind(addr).await?;

    log::info!("dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("dashboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("received Ctrl+C, shutting down"),
        _ = terminate => log::info!("received terminate signal, shutting down"),
    }
}
