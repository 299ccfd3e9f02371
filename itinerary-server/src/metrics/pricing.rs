//! Fare calculation.

use super::round_to;
use crate::domain::TransportMode;

const ORBITAL_BASE: f64 = 500.0;
const ORBITAL_PER_MINUTE: f64 = 8.0;
const DEFAULT_BASE: f64 = 40.0;
const DEFAULT_PER_MINUTE: f64 = 0.25;

const PEAK_MULTIPLIER: f64 = 1.15;
const RISK_SURCHARGE: f64 = 0.2;

/// Base fare for a leg from its mode and duration.
///
/// Orbital legs have their own tariff; every other mode, including ones
/// the planner does not recognise, is priced like a flight.
pub fn base_price_gbp(mode: &TransportMode, duration_minutes: u32) -> f64 {
    let minutes = f64::from(duration_minutes);
    match mode {
        TransportMode::Orbital => ORBITAL_BASE + ORBITAL_PER_MINUTE * minutes,
        TransportMode::Flight | TransportMode::Other(_) => {
            DEFAULT_BASE + DEFAULT_PER_MINUTE * minutes
        }
    }
}

/// Apply the peak and risk multipliers and round to pence.
///
/// The planner currently always passes `peak = false`.
pub fn apply_modifiers(price: f64, peak: bool, risk_score: f64) -> f64 {
    let mut price = price;
    if peak {
        price *= PEAK_MULTIPLIER;
    }
    price *= 1.0 + RISK_SURCHARGE * risk_score;
    round_to(price, 2)
}
