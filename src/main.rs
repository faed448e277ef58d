//! tagsock-gateway server entry point.
//!
//! Starts the Axum server with the WebSocket endpoint, then spawns the
//! blocking reader poll loop on its own thread bound to this runtime.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tagsock_gateway::api;
use tagsock_gateway::app_state::AppState;
use tagsock_gateway::config::GatewayConfig;
use tagsock_gateway::domain::BroadcastHub;
use tagsock_gateway::mapping::MappingStore;
use tagsock_gateway::reader::{SerialReader, run_poll_loop};
use tagsock_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting tagsock-gateway");

    // Build the hub and application state
    let hub = Arc::new(BroadcastHub::new());
    let app_state = AppState {
        hub: Arc::clone(&hub),
    };

    // Build router
    let app = Router::new()
        .merge(api::routes())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    // Start the poll loop on its own thread, bound to this runtime. If the
    // device cannot be opened the loop exits on its own; subscriber service
    // stays up either way.
    let handle = tokio::runtime::Handle::current();
    let store = MappingStore::new(config.mapping_file.clone());
    let device = config.reader_device.clone();
    let idle_delay = config.poll_idle_delay();
    std::thread::Builder::new()
        .name("tag-poll".to_string())
        .spawn(move || {
            run_poll_loop(SerialReader::new(), &device, store, hub, handle, idle_delay);
        })?;

    axum::serve(listener, app).await?;

    Ok(())
}
