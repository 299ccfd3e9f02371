//! Plan types.
//!
//! A `Plan` is a fully priced, timed and scored itinerary ready to be
//! returned to the caller.

use chrono::{DateTime, Utc};

use super::Leg;

/// Aggregate metrics for a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanMetrics {
    /// Total fare, rounded to 2 decimal places.
    pub total_price_gbp: f64,

    /// Total duration including the transfer buffer after every leg.
    pub total_duration_minutes: u32,

    /// Total emissions, rounded to 3 decimal places.
    pub total_emissions_kg: f64,

    /// Worst per-leg risk score. Weakest link, not a sum.
    pub risk_score: f64,
}

/// A scored itinerary.
///
/// Fields are public: a plan is assembled by the planner and then checked
/// by [`crate::planner::validate_plan`] rather than guarded by a constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub legs: Vec<Leg>,
    pub layovers: usize,
    pub metrics: PlanMetrics,
    pub score: f64,
    pub explanation: String,
}

impl Plan {
    /// Returns the departure instant of the first leg.
    pub fn departure(&self) -> Option<DateTime<Utc>> {
        self.legs.first().map(Leg::depart_at)
    }

    /// Returns the arrival instant of the final leg.
    pub fn final_arrival(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(Leg::arrive_at)
    }
}
