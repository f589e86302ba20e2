// src/config.rs
// =============================================================================
// Settings for one crawl.
//
// Defaults match what the CLI uses when no flags are given. Library callers
// start from CrawlConfig::default() and override what they need:
//
//   let config = CrawlConfig::default()
//       .with_max_pages(50)
//       .with_delay(Duration::ZERO);
// =============================================================================

use std::time::Duration;

/// Upper bound on pop attempts when the caller doesn't choose one
pub const DEFAULT_MAX_PAGES: usize = 1000;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DELAY_MS: u64 = 100;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum number of frontier pops (including pops of already-visited URLs)
    pub max_pages: usize,
    /// Per-request timeout for page fetches
    pub request_timeout: Duration,
    /// Pause after each successful fetch, to go easy on the server
    pub delay: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Largest page body read into memory; bigger pages fail to fetch
    pub max_body_bytes: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl CrawlConfig {
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_pages, 1000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.delay, Duration::from_millis(100));
        assert!(config.user_agent.starts_with("docs-crawler/"));
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_setters_chain() {
        let config = CrawlConfig::default()
            .with_max_pages(5)
            .with_delay(Duration::ZERO)
            .with_request_timeout(Duration::from_secs(2))
            .with_user_agent("test-agent")
            .with_max_body_bytes(64);
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.max_body_bytes, 64);
    }
}
