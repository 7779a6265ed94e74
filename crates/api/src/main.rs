//! CHEIFS report API server binary entrypoint.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cheifs_common::config::AppConfig;

use cheifs_api::routes::create_router;
use cheifs_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("cheifs_api=debug,cheifs_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting CHEIFS report API server...");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        policy = %config.sizing_policy,
        source = %config.valuation_source,
        "Configuration loaded"
    );

    // Build application state
    let state = AppState::new(config);

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
