//! HTTP surface of the mock route-data provider.
//!
//! Speaks the same contract `RouteClient` consumes, so the server can be
//! developed against it without a real provider.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::provider::{MockRouteProvider, ProviderError, RoutesRequest, RoutesResponse};

/// Health check body of the mock provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderHealth {
    pub ok: bool,
    pub chaos: bool,
}

/// Create the mock provider's router.
pub fn create_provider_router(provider: Arc<MockRouteProvider>) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/tools/routes.get", post(routes_get))
        .with_state(provider)
}

async fn health(State(provider): State<Arc<MockRouteProvider>>) -> Json<ProviderHealth> {
    Json(ProviderHealth {
        ok: true,
        chaos: provider.is_chaotic(),
    })
}

async fn routes_get(
    State(provider): State<Arc<MockRouteProvider>>,
    Json(request): Json<RoutesRequest>,
) -> Response {
    if request.max_layovers > crate::domain::MAX_LAYOVERS {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "detail": "max_layovers out of range" })),
        )
            .into_response();
    }

    match provider.routes(&request) {
        Ok(itineraries) => Json(RoutesResponse { itineraries }).into_response(),
        Err(ProviderError::Api { status, message }) => {
            warn!(status, "{message}");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(serde_json::json!({ "detail": message }))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": e.to_string() })),
        )
            .into_response(),
    }
}
