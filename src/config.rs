use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the async and blocking clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
    /// Whole-request timeout. `None` keeps the HTTP client default.
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_advent_of_code() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url(), "https://adventofcode.com");
        assert!(config.user_agent().starts_with("aoc-leaderboard/"));
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080//");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn builders_override_fields() {
        let config = ClientConfig::default()
            .with_user_agent("github.com/me/bot by me@example.com")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.user_agent(), "github.com/me/bot by me@example.com");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
