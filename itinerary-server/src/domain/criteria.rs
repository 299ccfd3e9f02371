//! Search criteria.

use chrono::{DateTime, Utc};

use super::{DomainError, LocationCode, Objective};

/// Largest layover limit a search may ask for.
pub const MAX_LAYOVERS: u32 = 6;

/// What the caller is looking for. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    origin: LocationCode,
    destination: LocationCode,
    depart_after: DateTime<Utc>,
    arrive_before: DateTime<Utc>,
    max_layovers: u32,
    objective: Objective,
}

impl SearchCriteria {
    /// Build validated criteria.
    ///
    /// # Errors
    ///
    /// - `TooManyLayovers` if `max_layovers` exceeds [`MAX_LAYOVERS`]
    /// - `InvalidWindow` if `arrive_before` is earlier than `depart_after`
    pub fn new(
        origin: LocationCode,
        destination: LocationCode,
        depart_after: DateTime<Utc>,
        arrive_before: DateTime<Utc>,
        max_layovers: u32,
        objective: Objective,
    ) -> Result<Self, DomainError> {
        if max_layovers > MAX_LAYOVERS {
            return Err(DomainError::TooManyLayovers {
                got: max_layovers,
                max: MAX_LAYOVERS,
            });
        }

        if arrive_before < depart_after {
            return Err(DomainError::InvalidWindow);
        }

        Ok(Self {
            origin,
            destination,
            depart_after,
            arrive_before,
            max_layovers,
            objective,
        })
    }

    pub fn origin(&self) -> LocationCode {
        self.origin
    }

    pub fn destination(&self) -> LocationCode {
        self.destination
    }

    /// Earliest instant the first leg may leave.
    pub fn depart_after(&self) -> DateTime<Utc> {
        self.depart_after
    }

    /// Latest acceptable arrival of the final leg.
    pub fn arrive_before(&self) -> DateTime<Utc> {
        self.arrive_before
    }

    pub fn max_layovers(&self) -> u32 {
        self.max_layovers
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn code(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn valid_criteria() {
        let criteria = SearchCriteria::new(
            code("LON"),
            code("NYC"),
            t0(),
            t0() + Duration::days(2),
            2,
            Objective::Cheapest,
        )
        .unwrap();

        assert_eq!(criteria.origin(), code("LON"));
        assert_eq!(criteria.destination(), code("NYC"));
        assert_eq!(criteria.max_layovers(), 2);
        assert_eq!(criteria.objective(), Objective::Cheapest);
        assert_eq!(criteria.arrive_before() - criteria.depart_after(), Duration::days(2));
    }

    #[test]
    fn layover_bounds() {
        let ok = SearchCriteria::new(
            code("LON"),
            code("NYC"),
            t0(),
            t0(),
            MAX_LAYOVERS,
            Objective::Balanced,
        );
        assert!(ok.is_ok());

        let err = SearchCriteria::new(
            code("LON"),
            code("NYC"),
            t0(),
            t0(),
            MAX_LAYOVERS + 1,
            Objective::Balanced,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::TooManyLayovers { got: 7, max: 6 });
    }

    #[test]
    fn reversed_window_rejected() {
        let err = SearchCriteria::new(
            code("LON"),
            code("NYC"),
            t0(),
            t0() - Duration::minutes(1),
            2,
            Objective::Balanced,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::InvalidWindow);
    }
}
