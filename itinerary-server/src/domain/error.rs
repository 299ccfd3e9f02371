//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider/IO errors.

use super::InvalidLocationCode;

/// Domain-level errors for request validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Origin or destination is not a valid location code
    #[error("{field}: {source}")]
    InvalidLocation {
        field: &'static str,
        source: InvalidLocationCode,
    },

    /// Layover limit outside the supported range
    #[error("max_layovers must be between 0 and {max}, got {got}")]
    TooManyLayovers { got: u32, max: u32 },

    /// Arrival deadline precedes the earliest departure
    #[error("arrive_before must not be earlier than depart_after")]
    InvalidWindow,

    /// A leg would arrive past the last representable instant
    #[error("leg of {duration_minutes} minutes overflows the calendar")]
    TimeOverflow { duration_minutes: u32 },
}
