//! SearXNG metasearch client
//!
//! This module provides a client for performing web searches against a
//! SearXNG instance using its JSON API.
//!
//! Key behaviors:
//! - Construction-time configuration: the base URL comes from an explicit
//!   config or the `SEARXNG_URL` environment variable, once
//! - A client without a base URL stays usable and reports "not configured"
//! - Domain filters are validated strictly; recency strings are coerced
//!   leniently
//! - Health probes are cached for the client's lifetime

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::OnceCell;
use url::Url;

use crate::config::SearchConfig;
use crate::types::{RecencyFilter, SearchResult, WebSearchRequest, DEFAULT_MAX_RESULTS};

/// Domain grammar for the `domain_filter` parameter: dot-separated labels
/// of letters, digits, and inner hyphens. A single label like "gov" is
/// valid.
static DOMAIN_FILTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*$")
        .unwrap()
});

/// Errors that can occur during search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No SearXNG base URL was provided at construction
    #[error("SearXNG URL not configured (set SEARXNG_URL env var)")]
    NotConfigured,
    /// The search query was empty or whitespace
    #[error("Search query cannot be empty")]
    EmptyQuery,
    /// The domain filter did not match the domain grammar
    #[error("Invalid domain_filter: '{0}'. Must be a valid domain (e.g., 'wikipedia.org', 'gov').")]
    InvalidDomainFilter(String),
    /// The backend answered with a non-success status
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// The request failed in transit or the response body was unreadable
    #[error("Search failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientConstruction(#[source] reqwest::Error),
}

/// SearXNG search client
///
/// One search is one GET against `<base>/search`; there is no persistent
/// session state beyond the cached health probe.
#[derive(Debug)]
pub struct SearxngClient {
    base_url: Option<String>,
    client: reqwest::Client,
    health_timeout: std::time::Duration,
    health: OnceCell<bool>,
}

impl SearxngClient {
    /// Creates a client configured from the environment
    pub fn new() -> Result<Self, SearchError> {
        Self::with_config(SearchConfig::from_env())
    }

    /// Creates a client with an explicit configuration
    ///
    /// A base URL that does not parse is dropped with a warning, leaving
    /// the client unconfigured rather than failing construction.
    pub fn with_config(config: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SearchError::ClientConstruction)?;

        Ok(Self {
            base_url: config.base_url.as_deref().and_then(normalize_base_url),
            client,
            health_timeout: config.health_timeout,
            health: OnceCell::new(),
        })
    }

    /// Whether a base URL is configured
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// The configured base URL, with any trailing slash removed
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Performs a web search
    ///
    /// Validation runs before any network activity: configuration, then
    /// query emptiness, then the domain filter. An unrecognized recency
    /// string is coerced to all_time with a warning rather than rejected.
    pub async fn search(
        &self,
        request: &WebSearchRequest,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(base_url) = &self.base_url else {
            return Err(SearchError::NotConfigured);
        };

        if request.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        if let Some(domain_filter) = &request.domain_filter {
            validate_domain_filter(domain_filter)?;
        }

        let recency =
            RecencyFilter::parse_lenient(request.recency.as_deref().unwrap_or("all_time"));

        let query = match &request.domain_filter {
            Some(domain_filter) => format!("site:{} {}", domain_filter, request.query),
            None => request.query.clone(),
        };
        let max_results = request.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

        tracing::debug!("Searching SearXNG for: '{}'", query);

        let mut params: Vec<(&str, &str)> = vec![
            ("q", query.as_str()),
            ("format", "json"),
            ("categories", "general"),
        ];
        if let Some(time_range) = recency.time_range_param() {
            params.push(("time_range", time_range));
        }

        let response = self
            .client
            .get(format!("{base_url}/search"))
            .query(&params)
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let payload: serde_json::Value = response.json().await.map_err(SearchError::Transport)?;

        let results: Vec<SearchResult> = payload
            .get("results")
            .and_then(|results| results.as_array())
            .map(|results| results.iter().take(max_results).map(map_result).collect())
            .unwrap_or_default();

        tracing::debug!("SearXNG returned {} results", results.len());
        Ok(results)
    }

    /// Probes the instance's `/healthz` endpoint, caching the first answer
    ///
    /// 200 means healthy; any other status or a transport failure means
    /// unhealthy. An unconfigured client reports unhealthy without probing
    /// and without caching, so configuring a new client probes fresh.
    pub async fn check_health(&self) -> bool {
        let Some(base_url) = &self.base_url else {
            return false;
        };

        *self
            .health
            .get_or_init(|| async {
                match self
                    .client
                    .get(format!("{base_url}/healthz"))
                    .timeout(self.health_timeout)
                    .send()
                    .await
                {
                    Ok(response) => {
                        let healthy = response.status() == reqwest::StatusCode::OK;
                        if !healthy {
                            tracing::warn!(
                                "SearXNG health check returned status {}",
                                response.status()
                            );
                        }
                        healthy
                    }
                    Err(e) => {
                        tracing::warn!("SearXNG health check failed: {}", e);
                        false
                    }
                }
            })
            .await
    }
}

/// Performs a one-off web search with a throwaway client built from the
/// environment
pub async fn web_search(request: &WebSearchRequest) -> Result<Vec<SearchResult>, SearchError> {
    let client = SearxngClient::new()?;
    client.search(request).await
}

/// Validates a domain filter against the domain grammar
pub fn validate_domain_filter(domain_filter: &str) -> Result<(), SearchError> {
    if DOMAIN_FILTER_PATTERN.is_match(domain_filter) {
        Ok(())
    } else {
        Err(SearchError::InvalidDomainFilter(domain_filter.to_string()))
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match Url::parse(trimmed) {
        Ok(_) => Some(trimmed.to_string()),
        Err(e) => {
            tracing::warn!("Ignoring invalid SearXNG URL '{}': {}", raw, e);
            None
        }
    }
}

fn map_result(item: &serde_json::Value) -> SearchResult {
    SearchResult {
        title: string_field(item, "title"),
        url: string_field(item, "url"),
        snippet: string_field(item, "content"),
        published_date: item
            .get("publishedDate")
            .and_then(|value| value.as_str())
            .map(str::to_string),
    }
}

fn string_field(item: &serde_json::Value, key: &str) -> String {
    item.get(key)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string()
}
