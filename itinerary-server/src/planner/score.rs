//! Plan scoring and ranking.
//!
//! Every objective produces a score where higher is better, so ranking is
//! always a descending sort; objectives only change the formula.

use crate::domain::{Objective, Plan, PlanMetrics};

const MIN_PRICE: f64 = 1.0;
const MIN_DURATION: u32 = 1;
const MIN_EMISSIONS: f64 = 0.001;
const MIN_RISK: f64 = 0.001;

const BALANCED_PRICE_WEIGHT: f64 = 0.45;
const BALANCED_DURATION_WEIGHT: f64 = 0.35;
const BALANCED_EMISSIONS_WEIGHT: f64 = 0.15;
const BALANCED_RISK_WEIGHT: f64 = 0.05;

/// Score a set of metrics under an objective.
///
/// Denominators are floored (price at 1, duration at 1 minute, emissions
/// and risk at 0.001) so a zero metric never divides by zero.
pub fn score(metrics: &PlanMetrics, objective: Objective) -> f64 {
    let cost = metrics.total_price_gbp.max(MIN_PRICE);
    let duration = f64::from(metrics.total_duration_minutes.max(MIN_DURATION));
    let emissions = metrics.total_emissions_kg.max(MIN_EMISSIONS);
    let risk = metrics.risk_score.max(MIN_RISK);

    match objective {
        Objective::Cheapest => 1.0 / cost,
        Objective::Fastest => 1.0 / duration,
        Objective::Greenest => 1.0 / emissions,
        Objective::Balanced => {
            BALANCED_PRICE_WEIGHT / cost
                + BALANCED_DURATION_WEIGHT / duration
                + BALANCED_EMISSIONS_WEIGHT / emissions
                + BALANCED_RISK_WEIGHT / (1.0 + risk)
        }
    }
}

/// Human-readable summary of a plan's metrics.
///
/// Real-valued metrics always print with a decimal point (`9.0`, not `9`).
pub fn explain(metrics: &PlanMetrics, objective: Objective) -> String {
    format!(
        "Optimized for {objective}. Price £{:?}, duration {}m, emissions {:?}kg, risk {:?}.",
        metrics.total_price_gbp,
        metrics.total_duration_minutes,
        metrics.total_emissions_kg,
        metrics.risk_score,
    )
}

/// Sort plans best-first.
///
/// The sort is stable: plans with equal scores keep the order they were
/// built in.
pub fn rank_plans(mut plans: Vec<Plan>) -> Vec<Plan> {
    plans.sort_by(|a, b| b.score.total_cmp(&a.score));
    plans
}
