//! Itinerary planner.
//!
//! Turns the route-data provider's raw candidate itineraries into timed,
//! priced and scored plans, ranked best-first for the caller's objective.
//!
//! The pipeline per search is: fetch, cap, build, deadline filter, score,
//! validate, rank. Only the fetch suspends; the rest is synchronous.

mod config;
mod score;
mod search;
mod validate;


pub use config::PlannerConfig;
pub use score::{explain, rank_plans, score};
pub use search::{Planner, RouteProvider, SearchError};
pub use validate::{ValidationError, validate_plan};
