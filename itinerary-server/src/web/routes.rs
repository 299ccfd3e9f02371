//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::planner::{Planner, RouteProvider, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: RouteProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health))
        .route("/api/search", post(search::<P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Search for itineraries.
async fn search<P>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, AppError>
where
    P: RouteProvider + Send + Sync + 'static,
{
    // Parse JSON manually so bad input maps to our error body
    let req: SearchRequest = serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })?;

    let criteria = req.to_criteria().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let planner = Planner::new(state.provider.as_ref(), state.config.as_ref());
    let plans = planner.search(&criteria).await?;

    Ok(Json(SearchResponse {
        plans: plans.iter().map(PlanResult::from_plan).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    ProviderUnavailable { message: String },
    ValidationFailure { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::ProviderUnavailable(_) => AppError::ProviderUnavailable {
                message: e.to_string(),
            },
            SearchError::Validation(_) => AppError::ValidationFailure {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid_request", message)
            }
            AppError::ProviderUnavailable { message } => {
                (StatusCode::BAD_GATEWAY, "provider_unavailable", message)
            }
            AppError::ValidationFailure { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "validation_failure", message)
            }
        };

        if status.is_server_error() {
            error!(%status, kind, "{message}");
        } else {
            warn!(%status, kind, "{message}");
        }

        let body = Json(ErrorResponse {
            error: message,
            kind: kind.to_string(),
        });
        (status, body).into_response()
    }
}
