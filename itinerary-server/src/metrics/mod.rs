//! Per-leg metric calculators.
//!
//! Pricing, emissions and risk are placeholder formulas; their shapes
//! and constants are part of the contract and tests depend on them.

mod emissions;
mod pricing;
mod risk;
mod time;

pub use emissions::estimate_emissions_kg;
pub use pricing::{apply_modifiers, base_price_gbp};
pub use risk::estimate_risk_score;
pub use time::estimate_times;

/// Round to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
