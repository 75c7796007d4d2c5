//! Hemolink HTTP Server Binary
//!
//! This is the main entry point for the analytics REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository (default)
//! cargo run --bin hemolink-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides hemolink.toml, default: 0.0.0.0)
//! - `PORT`: Server port (overrides hemolink.toml, default: 8080)
//! - `HEMOLINK_CONFIG`: Path to the TOML configuration file
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hemolink::config::ServiceConfig;
use hemolink::db::repositories::LocalRepository;
use hemolink::db::FullRepository;
use hemolink::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Hemolink HTTP Server");

    let config = ServiceConfig::load_or_default();

    // The in-memory store; a persistent directory/history backend plugs in
    // behind the same traits.
    let repository = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
    info!("Repository initialized successfully");

    // Determine bind address: environment overrides the config file
    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Create application state and router
    let state = AppState::with_config(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
