//! Leg timing.

use chrono::{DateTime, Duration, Utc};

/// Compute departure and arrival instants for one leg.
///
/// No scheduling slack is modelled: the leg leaves exactly at
/// `depart_after` and arrives `duration_minutes` later. Returns `None` if
/// the arrival is past the end of the representable calendar.
pub fn estimate_times(
    depart_after: DateTime<Utc>,
    duration_minutes: u32,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let arrive_at =
        depart_after.checked_add_signed(Duration::minutes(i64::from(duration_minutes)))?;
    Some((depart_after, arrive_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn departs_immediately() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let (depart, arrive) = estimate_times(start, 450).unwrap();

        assert_eq!(depart, start);
        assert_eq!(arrive, Utc.with_ymd_and_hms(2026, 3, 1, 15, 30, 0).unwrap());
    }

    #[test]
    fn zero_duration() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(estimate_times(start, 0), Some((start, start)));
    }

    #[test]
    fn longest_duration_from_today() {
        // u32::MAX minutes is about 8000 years
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let (_, arrive) = estimate_times(start, u32::MAX).unwrap();
        assert!(arrive > start);
    }

    #[test]
    fn overflow_is_none() {
        let end = DateTime::<Utc>::MAX_UTC - Duration::minutes(10);
        assert!(estimate_times(end, 10).is_some());
        assert!(estimate_times(end, 11).is_none());
    }
}
