//! Itinerary search.
//!
//! Fetches candidate itineraries from the route-data provider, times and
//! prices each one, drops those that miss the arrival deadline, then
//! scores, validates and ranks the rest.

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::{Leg, Plan, PlanMetrics, SearchCriteria};
use crate::metrics::{apply_modifiers, base_price_gbp, estimate_emissions_kg, estimate_risk_score};
use crate::provider::{Itinerary, ProviderError, RoutesRequest};

use super::config::PlannerConfig;
use super::score::{explain, rank_plans, score};
use super::validate::{ValidationError, validate_plan};

/// Error from itinerary search.
///
/// Either variant aborts the whole search; there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The provider failed, timed out, or sent an unusable response
    #[error("route provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// An assembled plan broke an invariant
    #[error("plan failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Source of candidate itineraries.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait RouteProvider {
    /// Fetch candidate itineraries for a route.
    ///
    /// Implementations may return fewer itineraries than exist, in any
    /// order. Dropping the returned future abandons the request.
    fn fetch_itineraries(
        &self,
        request: &RoutesRequest,
    ) -> impl Future<Output = Result<Vec<Itinerary>, ProviderError>> + Send;
}

/// Validate every built plan, then sort best-first.
///
/// One invalid plan fails the whole batch.
fn validate_and_rank(plans: Vec<Plan>) -> Result<Vec<Plan>, SearchError> {
    for plan in &plans {
        validate_plan(plan)?;
    }
    Ok(rank_plans(plans))
}

/// Running totals while walking an itinerary's segments.
#[derive(Debug, Default)]
struct Totals {
    duration_minutes: u32,
    price_gbp: f64,
    emissions_kg: f64,
    worst_risk: f64,
}

/// Itinerary planner.
pub struct Planner<'a, P: RouteProvider> {
    provider: &'a P,
    config: &'a PlannerConfig,
}

impl<'a, P: RouteProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Search for plans matching the criteria, best first.
    ///
    /// Makes exactly one provider call. An empty list means nothing met the
    /// deadline; it is not an error.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Plan>, SearchError> {
        let request = RoutesRequest {
            origin: criteria.origin(),
            destination: criteria.destination(),
            max_layovers: criteria.max_layovers(),
        };

        let itineraries = self.fetch(&request).await?;
        let received = itineraries.len();

        let mut plans = Vec::new();
        for (index, itinerary) in itineraries
            .iter()
            .take(self.config.max_candidates)
            .enumerate()
        {
            match self.build_plan(criteria, itinerary) {
                Some(plan) => plans.push(plan),
                None => debug!(index, "candidate dropped"),
            }
        }

        let plans = validate_and_rank(plans)?;

        info!(
            origin = %criteria.origin(),
            destination = %criteria.destination(),
            objective = %criteria.objective(),
            received,
            returned = plans.len(),
            "search complete"
        );

        Ok(plans)
    }

    /// Call the provider, bounded by the configured timeout.
    async fn fetch(&self, request: &RoutesRequest) -> Result<Vec<Itinerary>, ProviderError> {
        let call = self.provider.fetch_itineraries(request);

        let result = match tokio::time::timeout(self.config.provider_timeout(), call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                secs: self.config.provider_timeout_secs,
            }),
        };

        if let Err(e) = &result {
            warn!(error = %e, "route provider call failed");
        }

        result
    }

    /// Time, price and score one itinerary.
    ///
    /// Returns `None` for an itinerary with no segments, one whose timing
    /// runs off the end of the calendar, or one whose final arrival is after
    /// the deadline.
    fn build_plan(&self, criteria: &SearchCriteria, itinerary: &Itinerary) -> Option<Plan> {
        if itinerary.legs.is_empty() {
            debug!("itinerary has no segments");
            return None;
        }

        let buffer = self.config.transfer_buffer();
        let mut clock: DateTime<Utc> = criteria.depart_after();
        let mut legs = Vec::with_capacity(itinerary.legs.len());
        let mut totals = Totals::default();

        for segment in &itinerary.legs {
            let leg = match Leg::new(
                segment.provider.clone(),
                segment.mode.clone(),
                segment.origin.clone(),
                segment.destination.clone(),
                clock,
                segment.duration_minutes,
            ) {
                Ok(leg) => leg,
                Err(e) => {
                    debug!(error = %e, "itinerary cannot be timed");
                    return None;
                }
            };
            let Some(next) = leg.arrive_at().checked_add_signed(buffer) else {
                debug!(arrival = %leg.arrive_at(), "transfer buffer overflows the calendar");
                return None;
            };
            clock = next;

            totals.duration_minutes = totals
                .duration_minutes
                .saturating_add(segment.duration_minutes)
                .saturating_add(self.config.transfer_buffer_mins);

            let risk = estimate_risk_score(&segment.provider, &segment.mode);
            totals.worst_risk = totals.worst_risk.max(risk);

            let price = base_price_gbp(&segment.mode, segment.duration_minutes);
            totals.price_gbp += apply_modifiers(price, false, risk);

            totals.emissions_kg += estimate_emissions_kg(&segment.mode, segment.duration_minutes);

            legs.push(leg);
        }

        let arrival = legs.last().map(Leg::arrive_at)?;
        if arrival > criteria.arrive_before() {
            debug!(%arrival, deadline = %criteria.arrive_before(), "arrives after deadline");
            return None;
        }

        let metrics = PlanMetrics {
            total_price_gbp: crate::metrics::round_to(totals.price_gbp, 2),
            total_duration_minutes: totals.duration_minutes,
            total_emissions_kg: crate::metrics::round_to(totals.emissions_kg, 3),
            risk_score: totals.worst_risk,
        };

        let objective = criteria.objective();

        Some(Plan {
            layovers: legs.len().saturating_sub(1),
            legs,
            score: score(&metrics, objective),
            explanation: explain(&metrics, objective),
            metrics,
        })
    }
}
