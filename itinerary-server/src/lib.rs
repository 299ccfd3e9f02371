//! Multi-leg itinerary planner server.
//!
//! Answers: "what are the best ways to get from here to there before my
//! deadline?" Candidate itineraries come from an external route-data
//! provider; this crate times, prices, scores and ranks them.

pub mod domain;
pub mod metrics;
pub mod planner;
pub mod provider;
pub mod web;
