//! Country Gateway - Main Application Entry Point
//!
//! A thin REST gateway in front of a public country-data API. It exposes two
//! read-only endpoints that fetch from upstream, filter, sort and paginate,
//! then return JSON. Callers authenticate with a single API key generated at
//! startup.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream**: restcountries-compatible API via reqwest
//! - **Authentication**: one process-wide API key (`X-API-Key` or `?apiKey=`)
//! - **Format**: JSON responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the upstream client
//! 3. Generate and log the API key
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{services::upstream::UpstreamClient, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let upstream = UpstreamClient::new(&config.upstream_base_url)?;
    tracing::info!("Upstream API: {}", config.upstream_base_url);

    // The key lives only in memory; this log line is the only way to learn it
    let api_key = state::generate_api_key();
    tracing::info!("Generated API Key: {}", api_key);

    let app = app(AppState::new(upstream, api_key));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
fn app(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        .route("/countries", get(handlers::countries::list_countries))
        .route("/countries/{name}", get(handlers::countries::get_country))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
