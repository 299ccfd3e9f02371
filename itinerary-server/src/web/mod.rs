//! Web layer for the itinerary planner.
//!
//! Provides the HTTP search endpoint, plus the routes the mock provider
//! binary serves.

mod dto;
mod provider_routes;
mod routes;
mod state;

pub use dto::*;
pub use provider_routes::create_provider_router;
pub use routes::{AppError, create_router};
pub use state::AppState;
