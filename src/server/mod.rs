//! HTTP demo server.
//!
//! Exposes the fetcher over three routes: an HTML index (`/`), a raw JSON
//! passthrough (`/api`) and the fetch counters (`/stats`).

pub mod routes;

pub use routes::{router, AppState};

use anyhow::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Run the demo server until Ctrl-C.
///
/// # Arguments
/// * `state` - Shared resolver and catalog handles
/// * `addr` - Address to bind, e.g. "127.0.0.1:3000"
pub async fn run_server(state: AppState, addr: &str) -> Result<()> {
    let app = router(Arc::new(state)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
