//! Itinerary leg type.
//!
//! A `Leg` is one point-to-point transport segment of a plan, with its
//! instants already resolved against the running search clock.

use chrono::{DateTime, Utc};

use super::{DomainError, TransportMode};
use crate::metrics::estimate_times;

/// A leg of a plan (one provider, one mode).
///
/// Endpoints are kept as the provider sent them. Only the search criteria
/// are held to the three-letter code format; hubs such as spaceports need
/// not follow it.
///
/// # Invariants
///
/// - `arrive_at == depart_at + duration_minutes`
/// - duration is non-negative (unsigned by type)
///
/// Both instants are derived at construction, so the invariant cannot be
/// broken after the fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    provider: String,
    mode: TransportMode,
    origin: String,
    destination: String,
    depart_at: DateTime<Utc>,
    arrive_at: DateTime<Utc>,
    duration_minutes: u32,
}

impl Leg {
    /// Construct a leg departing at `depart_after`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeOverflow` if the arrival cannot be
    /// represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::{Leg, TransportMode};
    /// use chrono::{Duration, TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    /// let leg = Leg::new("earth-air", TransportMode::Flight, "LON", "KEF", start, 180).unwrap();
    ///
    /// assert_eq!(leg.depart_at(), start);
    /// assert_eq!(leg.arrive_at(), start + Duration::minutes(180));
    /// ```
    pub fn new(
        provider: impl Into<String>,
        mode: TransportMode,
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart_after: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        let (depart_at, arrive_at) = estimate_times(depart_after, duration_minutes)
            .ok_or(DomainError::TimeOverflow { duration_minutes })?;

        Ok(Self {
            provider: provider.into(),
            mode,
            origin: origin.into(),
            destination: destination.into(),
            depart_at,
            arrive_at,
            duration_minutes,
        })
    }

    /// Returns the operating provider's identity.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn mode(&self) -> &TransportMode {
        &self.mode
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn depart_at(&self) -> DateTime<Utc> {
        self.depart_at
    }

    pub fn arrive_at(&self) -> DateTime<Utc> {
        self.arrive_at
    }

    /// Returns the in-vehicle duration, excluding any transfer buffer.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    proptest! {
        /// Property: arrival is always departure plus the duration.
        #[test]
        fn arrival_is_departure_plus_duration(
            start_secs in 0i64..4_000_000_000,
            duration in 0u32..100_000,
        ) {
            let start = Utc.timestamp_opt(start_secs, 0).unwrap();
            let leg = Leg::new("p", TransportMode::Flight, "AAA", "BBB", start, duration).unwrap();

            prop_assert_eq!(leg.depart_at(), start);
            prop_assert_eq!(
                leg.arrive_at() - leg.depart_at(),
                Duration::minutes(i64::from(duration))
            );
        }
    }
}
