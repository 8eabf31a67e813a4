use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobs_api::config::Config;
use jobs_api::provider::LinkedInProvider;
use jobs_api::routes::build_router;
use jobs_api::server::Server;
use jobs_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "jobs_api={level},tower_http={level}",
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobs API v{}", env!("CARGO_PKG_VERSION"));

    let provider = Arc::new(LinkedInProvider::new()?);
    info!("LinkedIn job provider initialized");

    let state = AppState::new(provider, config.public_dir.clone());
    info!("Serving static assets from {}", config.public_dir.display());

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let server = Server::bind(addr, app).await?.start()?;
    info!(
        "Local jobs UI running at http://localhost:{}",
        server.local_addr().port()
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop().await
}
