//! Provider error types.

/// Errors from fetching candidate itineraries.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, client-side timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a valid routes response
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No response within the search's provider deadline
    #[error("provider did not respond within {secs}s")]
    Timeout { secs: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::Api {
            status: 500,
            message: "provider timeout".into(),
        };
        assert_eq!(err.to_string(), "API error 500: provider timeout");

        let err = ProviderError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = ProviderError::Timeout { secs: 5 };
        assert_eq!(err.to_string(), "provider did not respond within 5s");
    }
}
