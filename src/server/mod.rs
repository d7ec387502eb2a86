pub mod handlers;
pub mod types;

use crate::{Result, config::Config, inference::HttpInferenceClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Resolve environment overrides
    let base_url =
        std::env::var("INFERENCE_URL").unwrap_or_else(|_| config.inference.base_url.clone());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.server.port);

    // Initialize the upstream inference client
    let inference = HttpInferenceClient::new(
        &base_url,
        Duration::from_secs(config.inference.timeout_secs),
    )?;

    // Create application state
    let app_state = handlers::AppState {
        inference: Arc::new(inference),
    };

    // Create router
    let app = Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, port);

    info!("Starting server on {}", addr);
    info!("Forwarding analysis requests to {}", base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
