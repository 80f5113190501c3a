mod format;
mod handlers;
mod types;
mod state;
pub use format::*;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use crate::recorder::Recorder;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

/// Assembles the application router. Separate from `serve` so tests can
/// drive requests through it without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    // Build router with routes and middleware
    Router::new()
        // Core endpoints
        .route("/health", get(health_check))

        // Statistics endpoints
        .route("/mean", get(get_mean))
        .route("/median", get(get_median))
        .route("/mode", get(get_mode))
        .route("/all", get(get_all))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(host: String, port: u16, recorder: Arc<dyn Recorder>) -> Result<()> {
    // Create application state
    let state = Arc::new(AppState::new(recorder));

    let app = router(state);

    // Create socket address
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("Statistics API listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
