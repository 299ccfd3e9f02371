//! Plan invariant checks.
//!
//! A plan that fails here was assembled wrongly; it is a defect in the
//! pipeline, not a plan to filter out.

use crate::domain::Plan;

/// An assembled plan broke one of its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("negative price: {0}")]
    NegativePrice(f64),

    #[error("layover count mismatch: expected {expected}, got {actual}")]
    LayoverMismatch { expected: usize, actual: usize },

    #[error("risk_score out of range: {0}")]
    RiskOutOfRange(f64),
}

/// Check a plan before it is returned.
///
/// Checks, in order:
/// - total price is not negative
/// - layovers equal `legs - 1` (0 for zero or one leg)
/// - risk score lies in `[0, 1]`
///
/// Leg timing is not checked.
pub fn validate_plan(plan: &Plan) -> Result<(), ValidationError> {
    let price = plan.metrics.total_price_gbp;
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }

    let expected = plan.legs.len().saturating_sub(1);
    if plan.layovers != expected {
        return Err(ValidationError::LayoverMismatch {
            expected,
            actual: plan.layovers,
        });
    }

    let risk = plan.metrics.risk_score;
    if !(0.0..=1.0).contains(&risk) {
        return Err(ValidationError::RiskOutOfRange(risk));
    }

    Ok(())
}
