//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Nothing in here is
/// mutated by a search.
pub struct AppState<P> {
    /// Route-data provider
    pub provider: Arc<P>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(provider: P, config: PlannerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config: Arc::new(config),
        }
    }
}

// Manual impl: `P` itself need not be `Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: Arc::clone(&self.config),
        }
    }
}
