//! Data transfer objects for web requests and responses.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Leg, LocationCode, Objective, Plan, PlanMetrics, SearchCriteria};

fn default_max_layovers() -> u32 {
    2
}

/// Request to search for itineraries.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Origin location code (e.g. "LON")
    pub origin: String,

    /// Destination location code (e.g. "NYC")
    pub destination: String,

    /// Earliest departure, RFC 3339
    pub depart_after: DateTime<FixedOffset>,

    /// Latest arrival, RFC 3339
    pub arrive_before: DateTime<FixedOffset>,

    /// Maximum number of changes (0-6)
    #[serde(default = "default_max_layovers")]
    pub max_layovers: u32,

    /// Ranking objective
    #[serde(default)]
    pub optimize_for: Objective,
}

impl SearchRequest {
    /// Validate the request into domain criteria.
    pub fn to_criteria(&self) -> Result<SearchCriteria, DomainError> {
        let origin = LocationCode::parse_normalized(&self.origin).map_err(|source| {
            DomainError::InvalidLocation {
                field: "origin",
                source,
            }
        })?;
        let destination = LocationCode::parse_normalized(&self.destination).map_err(|source| {
            DomainError::InvalidLocation {
                field: "destination",
                source,
            }
        })?;

        SearchCriteria::new(
            origin,
            destination,
            self.depart_after.with_timezone(&Utc),
            self.arrive_before.with_timezone(&Utc),
            self.max_layovers,
            self.optimize_for,
        )
    }
}

/// Response for an itinerary search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Plans, best first
    pub plans: Vec<PlanResult>,
}

/// A plan in search results.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResult {
    pub legs: Vec<LegResult>,
    pub layovers: usize,
    pub metrics: MetricsResult,
    pub score: f64,
    pub explanation: String,
}

impl PlanResult {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            legs: plan.legs.iter().map(LegResult::from_leg).collect(),
            layovers: plan.layovers,
            metrics: MetricsResult::from(&plan.metrics),
            score: plan.score,
            explanation: plan.explanation.clone(),
        }
    }
}

/// One leg of a plan.
#[derive(Debug, Serialize, Deserialize)]
pub struct LegResult {
    pub provider: String,
    /// Transport mode name (e.g. "flight", "orbital")
    pub mode: String,
    pub origin: String,
    pub destination: String,
    pub depart_at: DateTime<Utc>,
    pub arrive_at: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl LegResult {
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            provider: leg.provider().to_string(),
            mode: leg.mode().to_string(),
            origin: leg.origin().to_string(),
            destination: leg.destination().to_string(),
            depart_at: leg.depart_at(),
            arrive_at: leg.arrive_at(),
            duration_minutes: leg.duration_minutes(),
        }
    }
}

/// Aggregate metrics of a plan.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResult {
    pub total_price_gbp: f64,
    pub total_duration_minutes: u32,
    pub total_emissions_kg: f64,
    pub risk_score: f64,
}

impl From<&PlanMetrics> for MetricsResult {
    fn from(m: &PlanMetrics) -> Self {
        Self {
            total_price_gbp: m.total_price_gbp,
            total_duration_minutes: m.total_duration_minutes,
            total_emissions_kg: m.total_emissions_kg,
            risk_score: m.risk_score,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Which kind of failure: `invalid_request`, `provider_unavailable` or
    /// `validation_failure`
    pub kind: String,
}
