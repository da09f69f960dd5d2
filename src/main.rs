//! Uploader Service - Main Entry Point
//!
//! Partitions shared-folder documents into chunks and relays them downstream.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uploader::api::{self, handlers::AppState};
use uploader::output::HttpRelayClient;
use uploader::types::UploaderConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "uploader=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = UploaderConfig::from_env();

    info!("Starting Uploader Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        docs_dir = %config.docs_dir.display(),
        relay_url = %config.relay_url,
        max_characters = config.chunking.max_characters,
        overlap = config.chunking.overlap,
        "Loaded configuration"
    );

    // Initialize components
    let relay = HttpRelayClient::new(&config.relay_url).context("failed to build relay client")?;
    let port = config.port;
    let state = Arc::new(AppState::new(config, Arc::new(relay)));

    // Build HTTP routes
    let app = api::routes(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
