use std::net::SocketAddr;

use itinerary_server::planner::PlannerConfig;
use itinerary_server::provider::{MockRouteProvider, ProviderConfig, RouteClient};
use itinerary_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut planner_config = PlannerConfig::default();
    if let Ok(secs) = std::env::var("ROUTES_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => planner_config.provider_timeout_secs = secs,
            Err(_) => warn!(%secs, "ignoring invalid ROUTES_TIMEOUT_SECS"),
        }
    }

    let addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .expect("LISTEN_ADDR must be a socket address");

    let app = if env_flag("USE_MOCK_PROVIDER") {
        let provider = if env_flag("MOCK_CHAOS") {
            MockRouteProvider::with_chaos()
        } else {
            MockRouteProvider::new()
        };
        info!(chaos = provider.is_chaotic(), "using in-process mock provider");
        create_router(AppState::new(provider, planner_config))
    } else {
        let mut provider_config = match std::env::var("ROUTES_URL") {
            Ok(url) => ProviderConfig::new(url),
            Err(_) => ProviderConfig::default(),
        };
        provider_config = provider_config.with_timeout(planner_config.provider_timeout_secs);
        let client = RouteClient::new(provider_config).expect("Failed to create route client");
        info!(url = client.base_url(), "using remote route provider");
        create_router(AppState::new(client, planner_config))
    };

    info!("Itinerary planner listening on http://{addr}");
    info!("  GET  /healthz     - Health check");
    info!("  POST /api/search  - Search itineraries");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
