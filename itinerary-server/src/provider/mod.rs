//! Route-data provider.
//!
//! The planner obtains candidate itineraries from an external provider
//! over a small JSON contract:
//!
//! - `POST {base_url}/tools/routes.get` with `{origin, destination, max_layovers}`
//! - response `{"itineraries": [{"legs": [segment, ...]}, ...]}`
//!
//! The provider may return fewer itineraries than it has, return them in
//! any order, or fail outright. Nothing downstream assumes otherwise.

mod client;
mod error;
mod mock;
mod types;

pub use client::{ProviderConfig, RouteClient};
pub use error::ProviderError;
pub use mock::MockRouteProvider;
pub use types::{Itinerary, RouteSegment, RoutesRequest, RoutesResponse};
