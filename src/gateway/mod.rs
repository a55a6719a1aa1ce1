//! HTTP gateway: one route, `POST /refactor`, behind CORS, panic catching and request tracing.

pub mod cors;
pub mod form;
pub mod handlers;
pub mod response;

use crate::config::toml_config::{CorsConfig, RelayConfig};
use crate::core::refactor::RefactorService;
use crate::utils::error::Result;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RefactorService>,
}

pub fn build_router(service: Arc<RefactorService>, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/refactor", post(handlers::refactor))
        .layer(CatchPanicLayer::custom(response::handle_panic))
        .layer(cors::build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

pub async fn serve(config: &RelayConfig, service: Arc<RefactorService>) -> Result<()> {
    let mode = service.mode();
    let app = build_router(service, &config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        "🚀 Listening on http://{} ({} mode)",
        listener.local_addr()?,
        mode
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
