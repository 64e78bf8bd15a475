//! robo-advisor HTTP Server
//!
//! Axum host for the Lex code hook. Lex (or a proxy in front of it) posts
//! the raw event and receives the dialog action as JSON.

mod config;
mod handlers;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{fulfillment_handler, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let router = robo_advisor::router();
    tracing::info!("Registered {} intent(s):", router.len());
    for name in router.names() {
        tracing::info!("  • {}", name);
    }

    let app = app(AppState::new(router));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("robo-advisor code hook running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  POST /lex/fulfillment - Lex code hook");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes and middleware
fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/lex/fulfillment", post(fulfillment_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
