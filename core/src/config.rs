//! Shared API configuration.
//!
//! # Design
//! One process-wide, read-only value constructed at startup and injected
//! into `PostsApi` — never mutable global state. Only the knobs this system
//! uses are modeled: the base URL and a request timeout.

use std::time::Duration;

/// Default upstream when `POSTS_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only configuration for the posts API transport.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Base URL from `POSTS_API_URL`, falling back to the public fixture.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POSTS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_fixture() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ApiConfig::new("http://localhost:3000").with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
