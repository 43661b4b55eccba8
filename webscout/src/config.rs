//! Configuration for web search and fetch services
//!
//! Plain structs with defaulted fields. The only environmental input is
//! `SEARXNG_URL`, read once when a config is built from the environment;
//! everything else is explicit construction.

use std::time::Duration;

use crate::limiter::MIN_REQUEST_INTERVAL;

/// Environment variable naming the SearXNG base URL
pub const SEARXNG_URL_ENV: &str = "SEARXNG_URL";

/// Default timeout for search requests
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for health probes
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for page fetches
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Responses declaring a body larger than this many bytes are rejected unread
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 1_000_000;

/// Default User-Agent header for page fetches
pub const DEFAULT_USER_AGENT: &str = "webscout/1.0 (https://github.com/webscout/webscout)";

/// Default cap on redirects followed during a fetch
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for the SearXNG search client
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the SearXNG instance; `None` leaves the client
    /// permanently unconfigured
    pub base_url: Option<String>,
    /// Timeout for search requests
    pub timeout: Duration,
    /// Timeout for health probes
    pub health_timeout: Duration,
}

impl SearchConfig {
    /// Builds a config taking the base URL from the `SEARXNG_URL` variable
    ///
    /// An unset or empty variable leaves the base URL absent; the client
    /// built from it reports "not configured" instead of erroring per call.
    pub fn from_env() -> Self {
        let base_url = std::env::var(SEARXNG_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty());
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Builds a config with an explicit base URL and default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_SEARCH_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }
}

/// Configuration for the web fetcher
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Default timeout for fetch requests; individual requests may override
    pub timeout: Duration,
    /// Cap on the declared response size in bytes
    pub max_content_length: u64,
    /// User-Agent header sent with every fetch
    pub user_agent: String,
    /// Maximum redirects followed per request
    pub max_redirects: usize,
    /// Minimum interval between rate-limited fetches
    pub min_request_interval: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            min_request_interval: MIN_REQUEST_INTERVAL,
        }
    }
}
