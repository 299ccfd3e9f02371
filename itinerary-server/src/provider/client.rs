//! Route-data provider HTTP client.
//!
//! One POST per search. No retries: a failed or slow provider fails the
//! search that asked.

use std::time::Duration;

use tracing::debug;

use super::error::ProviderError;
use super::types::{Itinerary, RoutesRequest, RoutesResponse};
use crate::planner::RouteProvider;

/// Default base URL for the provider.
const DEFAULT_BASE_URL: &str = "http://localhost:8765";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the route client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider (tools are mounted under `/tools`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Create a config pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the route-data provider.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch candidate itineraries for a route.
    pub async fn get_routes(&self, request: &RoutesRequest) -> Result<RoutesResponse, ProviderError> {
        let url = format!("{}/tools/routes.get", self.base_url);
        debug!(%url, origin = %request.origin, destination = %request.destination, "requesting routes");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
        })
    }
}

impl RouteProvider for RouteClient {
    async fn fetch_itineraries(
        &self,
        request: &RoutesRequest,
    ) -> Result<Vec<Itinerary>, ProviderError> {
        Ok(self.get_routes(request).await?.itineraries)
    }
}
