//! Domain types for the itinerary planner.
//!
//! This module contains the core domain model types. Types that carry
//! invariants enforce them at construction time, so code that receives
//! them can trust their validity.

mod criteria;
mod error;
mod leg;
mod location;
mod mode;
mod objective;
mod plan;

pub use criteria::{MAX_LAYOVERS, SearchCriteria};
pub use error::DomainError;
pub use leg::Leg;
pub use location::{InvalidLocationCode, LocationCode};
pub use mode::TransportMode;
pub use objective::Objective;
pub use plan::{Plan, PlanMetrics};
