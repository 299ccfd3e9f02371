//! Provider risk estimate.
//!
//! Placeholder for a live risk signal. The score must be reproducible, so it
//! is drawn from a seeded generator rather than true randomness:
//!
//! - seed: sum of the Unicode scalar values of `provider` followed by `mode`
//! - generator: `rand::rngs::SmallRng::seed_from_u64(seed)`
//! - draw: one `f64` uniform in `[0, 1)`
//!
//! The score is `0.15 + 0.35 * draw`, rounded to 3 decimal places, so it
//! always lies in `[0.15, 0.5]`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::round_to;
use crate::domain::TransportMode;

const RISK_FLOOR: f64 = 0.15;
const RISK_SPAN: f64 = 0.35;

/// Deterministic risk score for a provider operating a mode.
pub fn estimate_risk_score(provider: &str, mode: &TransportMode) -> f64 {
    let seed = risk_seed(provider, mode.as_str());
    let mut rng = SmallRng::seed_from_u64(seed);
    let draw: f64 = rng.random();
    round_to(RISK_FLOOR + draw * RISK_SPAN, 3)
}

fn risk_seed(provider: &str, mode: &str) -> u64 {
    provider
        .chars()
        .chain(mode.chars())
        .map(|c| u64::from(u32::from(c)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_char_code_sum() {
        // 'a' + 'b' + 'c' = 97 + 98 + 99
        assert_eq!(risk_seed("ab", "c"), 294);
        assert_eq!(risk_seed("", ""), 0);
    }

    #[test]
    fn seed_ignores_split_point() {
        assert_eq!(risk_seed("earth-air", "flight"), risk_seed("earth-airflight", ""));
    }

    #[test]
    fn deterministic() {
        let a = estimate_risk_score("earth-air", &TransportMode::Flight);
        let b = estimate_risk_score("earth-air", &TransportMode::Flight);
        assert_eq!(a, b);
    }

    #[test]
    fn known_providers_in_range() {
        for (provider, mode) in [
            ("earth-air", TransportMode::Flight),
            ("northwind", TransportMode::Flight),
            ("orbitalx", TransportMode::Orbital),
            ("tulip", TransportMode::Flight),
        ] {
            let score = estimate_risk_score(provider, &mode);
            assert!((0.15..=0.5).contains(&score), "{provider}: {score}");
        }
    }

    #[test]
    fn rounded_to_three_places() {
        let score = estimate_risk_score("northwind", &TransportMode::Flight);
        assert_eq!(score, (score * 1000.0).round() / 1000.0);
    }
}
