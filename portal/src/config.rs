//! Request client configuration.

use std::time::Duration;

/// Ceiling applied to every backend request unless overridden.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend used when nothing is configured (local development API).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Where the backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config for `base_url`, dropping trailing slashes. A blank value
    /// falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned(), timeout: DEFAULT_REQUEST_TIMEOUT }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join a resource path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let config = ClientConfig::new("https://api.example.com/v1///");
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn blank_base_url_uses_default() {
        assert_eq!(ClientConfig::new("  ").base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn url_joins_with_and_without_leading_slash() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.url("/categories"), "https://api.example.com/categories");
        assert_eq!(config.url("tutors/t1"), "https://api.example.com/tutors/t1");
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
