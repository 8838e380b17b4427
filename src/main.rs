//! signal-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST, webhook, and WebSocket
//! endpoints, plus the supervised ledger connection loop.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use signal_gateway::api;
use signal_gateway::app_state::AppState;
use signal_gateway::auth::{SessionIssuer, SignatureVerifier};
use signal_gateway::config::GatewayConfig;
use signal_gateway::domain::{EventBus, TrackedPoolSet};
use signal_gateway::ledger::LedgerConnection;
use signal_gateway::relay::{EventRelay, SwapEventExtractor};
use signal_gateway::signing::{HttpSigningService, SignRequestBroker};
use signal_gateway::ws::handler::ws_handler;

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
    tracing::info!(addr = %config.listen_addr, network = %config.network, "starting signal-gateway");

    let http_timeout = Duration::from_secs(config.http_timeout_secs);

    // Supervised ledger connection
    let ledger = Arc::new(LedgerConnection::spawn(
        config.ledger_endpoint.clone(),
        Duration::from_secs(config.ledger_retry_secs),
        http_timeout,
    )?);
    ledger.ensure_connected();

    // Signing service + broker
    let signing = Arc::new(HttpSigningService::new(
        &config.signing_base_url,
        &config.signing_api_key,
        &config.signing_api_secret,
        http_timeout,
    )?);
    let broker = Arc::new(SignRequestBroker::new(
        signing,
        Arc::clone(&ledger),
        config.network,
        config.swap_expire_mins,
    ));

    // Relay pipeline
    let pools = Arc::new(TrackedPoolSet::new(config.tracked_pools.clone()));
    tracing::info!(tracked = pools.len(), "tracked pool set loaded");
    let event_bus = EventBus::new(config.event_bus_capacity);
    let relay = Arc::new(EventRelay::new(
        pools,
        SwapEventExtractor::new(&config.wrapped_native_mint),
        event_bus.clone(),
        &config.fanout_channel,
        &config.fanout_event,
    ));

    // Build application state
    let app_state = AppState {
        broker,
        verifier: SignatureVerifier::new(config.network),
        sessions: Arc::new(SessionIssuer::new(&config.session_secret)),
        session_ttl: Duration::from_secs(config.session_ttl_secs),
        relay,
        event_bus,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(http_timeout))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
