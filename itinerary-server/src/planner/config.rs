//! Planner configuration.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of provider itineraries considered, in provider order.
    pub max_candidates: usize,

    /// Fixed transfer time added after every leg (minutes).
    pub transfer_buffer_mins: u32,

    /// How long to wait for the route-data provider (seconds).
    pub provider_timeout_secs: u64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_candidates: usize, transfer_buffer_mins: u32, provider_timeout_secs: u64) -> Self {
        Self {
            max_candidates,
            transfer_buffer_mins,
            provider_timeout_secs,
        }
    }

    /// Returns the transfer buffer as a Duration.
    pub fn transfer_buffer(&self) -> Duration {
        Duration::minutes(i64::from(self.transfer_buffer_mins))
    }

    /// Returns the provider timeout as a std Duration.
    pub fn provider_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.provider_timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_candidates: 3,
            transfer_buffer_mins: 35,
            provider_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.max_candidates, 3);
        assert_eq!(config.transfer_buffer_mins, 35);
        assert_eq!(config.provider_timeout_secs, 5);
    }

    #[test]
    fn duration_methods() {
        let config = PlannerConfig::default();

        assert_eq!(config.transfer_buffer(), Duration::minutes(35));
        assert_eq!(config.provider_timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(5, 20, 2);

        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.transfer_buffer_mins, 20);
        assert_eq!(config.provider_timeout_secs, 2);
    }
}
