//! Standalone mock route-data provider.
//!
//! Serves the sample itineraries over the provider contract. Set
//! `MOCK_CHAOS=1` to inject failures, truncation and reordering.

use std::net::SocketAddr;
use std::sync::Arc;

use itinerary_server::provider::MockRouteProvider;
use itinerary_server::web::create_provider_router;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default port, matching the server's default `ROUTES_URL`.
const DEFAULT_PORT: u16 = 8765;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let chaos = std::env::var("MOCK_CHAOS").is_ok_and(|v| v == "1");
    let port = std::env::var("MOCK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let provider = if chaos {
        MockRouteProvider::with_chaos()
    } else {
        MockRouteProvider::new()
    };

    let app = create_provider_router(Arc::new(provider));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(chaos, "Mock route provider listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind mock provider port");
    axum::serve(listener, app).await.expect("Server error");
}
