//! Mock route-data provider for development and testing.
//!
//! Serves a fixed set of sample itineraries. With chaos enabled it also
//! misbehaves the way a real provider can: it fails, truncates its answer,
//! or reorders it.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::error::ProviderError;
use super::types::{Itinerary, RouteSegment, RoutesRequest};
use crate::domain::{LocationCode, TransportMode};
use crate::planner::RouteProvider;

/// Chaos roll below this fails the call outright.
const FAIL_BELOW: f64 = 0.15;
/// Chaos roll below this keeps only the first two itineraries.
const TRUNCATE_BELOW: f64 = 0.30;
/// Chaos roll below this shuffles the itineraries.
const SHUFFLE_BELOW: f64 = 0.40;

/// In-process provider serving sample itineraries.
pub struct MockRouteProvider {
    /// Present only when chaos mode is on.
    chaos: Option<Mutex<SmallRng>>,
}

impl MockRouteProvider {
    /// Create a well-behaved mock provider.
    pub fn new() -> Self {
        Self { chaos: None }
    }

    /// Create a mock provider with fault injection, seeded from the OS.
    pub fn with_chaos() -> Self {
        Self {
            chaos: Some(Mutex::new(SmallRng::from_os_rng())),
        }
    }

    /// Create a mock provider with fault injection and a fixed seed.
    pub fn with_chaos_seed(seed: u64) -> Self {
        Self {
            chaos: Some(Mutex::new(SmallRng::seed_from_u64(seed))),
        }
    }

    /// Whether fault injection is enabled.
    pub fn is_chaotic(&self) -> bool {
        self.chaos.is_some()
    }

    /// Answer a routes request.
    ///
    /// Itineraries needing more layovers than requested are left out.
    pub fn routes(&self, request: &RoutesRequest) -> Result<Vec<Itinerary>, ProviderError> {
        let mut itineraries: Vec<Itinerary> =
            sample_itineraries(request.origin, request.destination)
                .into_iter()
                .filter(|i| i.layovers() <= request.max_layovers as usize)
                .collect();

        let Some(chaos) = &self.chaos else {
            return Ok(itineraries);
        };

        let mut rng = chaos.lock().unwrap_or_else(|e| e.into_inner());
        let roll: f64 = rng.random();
        debug!(roll, "mock provider chaos roll");

        if roll < FAIL_BELOW {
            return Err(ProviderError::Api {
                status: 500,
                message: "provider timeout".to_string(),
            });
        }
        if roll < TRUNCATE_BELOW {
            itineraries.truncate(2);
        }
        if roll < SHUFFLE_BELOW {
            itineraries.shuffle(&mut *rng);
        }

        Ok(itineraries)
    }
}

impl Default for MockRouteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProvider for MockRouteProvider {
    async fn fetch_itineraries(
        &self,
        request: &RoutesRequest,
    ) -> Result<Vec<Itinerary>, ProviderError> {
        self.routes(request)
    }
}

fn segment(
    origin: &str,
    destination: &str,
    mode: TransportMode,
    provider: &str,
    duration_minutes: u32,
) -> RouteSegment {
    RouteSegment {
        origin: origin.to_string(),
        destination: destination.to_string(),
        mode,
        provider: provider.to_string(),
        duration_minutes,
    }
}

/// The sample itineraries, in their canonical order.
fn sample_itineraries(origin: LocationCode, destination: LocationCode) -> Vec<Itinerary> {
    let (origin, destination) = (origin.as_str(), destination.as_str());
    let (kef, iss, ams) = ("KEF", "ISS", "AMS");
    let flight = || TransportMode::Flight;

    vec![
        // Direct flight
        Itinerary {
            legs: vec![segment(origin, destination, flight(), "earth-air", 450)],
        },
        // One stop via Reykjavik
        Itinerary {
            legs: vec![
                segment(origin, kef, flight(), "earth-air", 180),
                segment(kef, destination, flight(), "northwind", 360),
            ],
        },
        // Orbital transfer
        Itinerary {
            legs: vec![
                segment(origin, iss, TransportMode::Orbital, "orbitalx", 90),
                segment(iss, destination, flight(), "earth-air", 420),
            ],
        },
        // Longer, via Amsterdam
        Itinerary {
            legs: vec![
                segment(origin, ams, flight(), "tulip", 80),
                segment(ams, destination, flight(), "tulip", 420),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(max_layovers: u32) -> RoutesRequest {
        RoutesRequest {
            origin: LocationCode::parse("LON").unwrap(),
            destination: LocationCode::parse("NYC").unwrap(),
            max_layovers,
        }
    }

    #[test]
    fn serves_all_samples() {
        let provider = MockRouteProvider::new();
        let itineraries = provider.routes(&request(2)).unwrap();

        assert_eq!(itineraries.len(), 4);
        assert_eq!(itineraries[0].legs[0].duration_minutes, 450);
        assert_eq!(itineraries[2].legs[0].mode, TransportMode::Orbital);
        assert!(!provider.is_chaotic());
    }

    #[test]
    fn respects_max_layovers() {
        let provider = MockRouteProvider::new();
        let itineraries = provider.routes(&request(0)).unwrap();

        assert_eq!(itineraries.len(), 1);
        assert_eq!(itineraries[0].layovers(), 0);
    }

    #[test]
    fn endpoints_follow_request() {
        let provider = MockRouteProvider::new();
        let itineraries = provider.routes(&request(2)).unwrap();

        for itinerary in &itineraries {
            assert_eq!(itinerary.legs.first().unwrap().origin.as_str(), "LON");
            assert_eq!(itinerary.legs.last().unwrap().destination.as_str(), "NYC");
            for pair in itinerary.legs.windows(2) {
                assert_eq!(pair[0].destination, pair[1].origin);
            }
        }
    }

    #[test]
    fn chaos_outcomes_are_bounded() {
        let provider = MockRouteProvider::with_chaos_seed(7);
        assert!(provider.is_chaotic());

        let mut failures = 0;
        for _ in 0..200 {
            match provider.routes(&request(2)) {
                Ok(itineraries) => assert!(!itineraries.is_empty() && itineraries.len() <= 4),
                Err(ProviderError::Api { status, .. }) => {
                    assert_eq!(status, 500);
                    failures += 1;
                }
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        // Roughly 15% of 200; wide bounds keep this independent of the seed.
        assert!(failures > 5 && failures < 80, "failures = {failures}");
    }

    #[test]
    fn chaos_is_reproducible_with_seed() {
        let a = MockRouteProvider::with_chaos_seed(42);
        let b = MockRouteProvider::with_chaos_seed(42);

        for _ in 0..20 {
            let ra = a.routes(&request(2)).ok();
            let rb = b.routes(&request(2)).ok();
            assert_eq!(ra, rb);
        }
    }

    #[tokio::test]
    async fn implements_route_provider() {
        let provider = MockRouteProvider::default();
        let itineraries = provider.fetch_itineraries(&request(1)).await.unwrap();
        assert_eq!(itineraries.len(), 4);
    }
}
