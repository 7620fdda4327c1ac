//! Fleetline HTTP Server Binary
//!
//! This is the main entry point for the fleetline REST API server.
//! It initializes the store, wires the fleet service and live hub, sets up
//! the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) store (default)
//! cargo run --bin fleetline-server --features "local-store,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STORE_TYPE`: Store backend ("local")
//! - `GEOLOCATE_URL`: Geolocation fallback endpoint override
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use fleetline::http::{create_router, AppState};
use fleetline::services::{FleetService, GeoLocator, HttpLocator, LiveHub, UnavailableLocator};
use fleetline::store::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Fleetline HTTP Server");

    let mut config = AppConfig::load_default();
    if let Ok(url) = env::var("GEOLOCATE_URL") {
        config.geolocate.url = url;
    }

    // Initialize global store once and reuse it across the app
    fleetline::init_store().map_err(|e| anyhow::anyhow!(e))?;
    let store = Arc::clone(fleetline::get_store()?);
    info!("Store initialized successfully");

    // Wire the live hub and fleet service
    let hub = LiveHub::new(config.broadcast.channel_capacity);
    let locator: Arc<dyn GeoLocator> = match HttpLocator::new(&config.geolocate) {
        Ok(locator) => Arc::new(locator),
        Err(e) => {
            warn!("Geolocation fallback unavailable: {}", e);
            Arc::new(UnavailableLocator)
        }
    };
    let fleet = FleetService::new(store.clone(), hub, locator);

    // Create application state
    let state = AppState::new(store, fleet);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Live channels: /v1/live/vehicles, /v1/live/passengers");

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
