//! Carbon estimate.

use super::round_to;
use crate::domain::TransportMode;

const ORBITAL_KG_PER_HOUR: f64 = 5.0;
const DEFAULT_KG_PER_HOUR: f64 = 1.2;

/// Estimated emissions for a leg, rounded to grams.
///
/// Same default branch as pricing: only orbital legs are special-cased.
pub fn estimate_emissions_kg(mode: &TransportMode, duration_minutes: u32) -> f64 {
    let hours = f64::from(duration_minutes) / 60.0;
    let rate = match mode {
        TransportMode::Orbital => ORBITAL_KG_PER_HOUR,
        TransportMode::Flight | TransportMode::Other(_) => DEFAULT_KG_PER_HOUR,
    };
    round_to(rate * hours, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_emissions() {
        assert_eq!(estimate_emissions_kg(&TransportMode::Flight, 60), 1.2);
        assert_eq!(estimate_emissions_kg(&TransportMode::Flight, 450), 9.0);
    }

    #[test]
    fn orbital_emissions() {
        assert_eq!(estimate_emissions_kg(&TransportMode::Orbital, 90), 7.5);
    }

    #[test]
    fn unknown_mode_uses_default_rate() {
        let other = TransportMode::Other("balloon".into());
        assert_eq!(estimate_emissions_kg(&other, 60), 1.2);
    }

    #[test]
    fn rounds_to_three_places() {
        // 1.2 * 7 / 60 = 0.14
        assert_eq!(estimate_emissions_kg(&TransportMode::Flight, 7), 0.14);
        // 5.0 * 1 / 60 = 0.08333...
        assert_eq!(estimate_emissions_kg(&TransportMode::Orbital, 1), 0.083);
    }

    #[test]
    fn zero_duration_is_zero() {
        assert_eq!(estimate_emissions_kg(&TransportMode::Orbital, 0), 0.0);
    }
}
