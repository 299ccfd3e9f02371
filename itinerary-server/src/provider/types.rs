//! Wire types for the route-data provider contract.

use serde::{Deserialize, Serialize};

use crate::domain::{LocationCode, TransportMode};

/// Request body for `routes.get`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesRequest {
    pub origin: LocationCode,
    pub destination: LocationCode,
    #[serde(default = "default_max_layovers")]
    pub max_layovers: u32,
}

fn default_max_layovers() -> u32 {
    2
}

/// Response body for `routes.get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutesResponse {
    /// Candidate itineraries, in whatever order the provider chose.
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

/// One candidate itinerary: an ordered list of raw segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<RouteSegment>,
}

impl Itinerary {
    /// Number of changes this itinerary needs.
    pub fn layovers(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}

/// A raw segment as sent by the provider, before timing and pricing.
///
/// Endpoints are free-form: hubs are not required to be three-letter codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    pub provider: String,
    pub duration_minutes: u32,
}
