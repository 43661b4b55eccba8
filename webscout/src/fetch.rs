//! Web page fetching with content extraction
//!
//! A [`WebFetcher`] owns one HTTP client, one shared rate limiter, and one
//! extraction dispatcher. A fetch validates the URL before any network or
//! rate-limit activity, waits on the limiter unless the request opted out,
//! performs a single redirect-following GET, and hands the body to the
//! extractor for the requested mode.

use std::sync::Arc;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::extract::Extractor;
use crate::limiter::RateLimiter;
use crate::types::{FetchResult, WebFetchRequest};

/// Errors that can occur during fetch operations
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL was empty or whitespace
    #[error("URL cannot be empty")]
    EmptyUrl,
    /// The URL scheme was not HTTP or HTTPS
    #[error("URL must start with http:// or https://")]
    UnsupportedScheme,
    /// The response declared a body larger than the configured cap
    #[error("Content too large: {0} bytes")]
    ContentTooLarge(u64),
    /// The server answered with a non-success status
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// The request failed in transit or the body was unreadable
    #[error("Fetch failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientConstruction(#[source] reqwest::Error),
}

/// Fetches web pages and extracts their content
#[derive(Debug)]
pub struct WebFetcher {
    client: reqwest::Client,
    config: FetchConfig,
    limiter: Arc<RateLimiter>,
    extractor: Extractor,
}

impl WebFetcher {
    /// Creates a fetcher with default configuration
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetchConfig::default())
    }

    /// Creates a fetcher with a custom configuration
    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .build()
            .map_err(FetchError::ClientConstruction)?;

        Ok(Self {
            client,
            limiter: Arc::new(RateLimiter::new(config.min_request_interval)),
            extractor: Extractor::new(),
            config,
        })
    }

    /// Replaces the extraction dispatcher, keeping client and limiter
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The rate limiter shared by this fetcher's rate-limited requests
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Fetches a page and extracts content per the requested mode
    ///
    /// The returned [`FetchResult`] carries the URL exactly as requested
    /// (never redirect-resolved), the content length in characters, and the
    /// extraction mode that actually ran.
    pub async fn fetch(&self, request: &WebFetchRequest) -> Result<FetchResult, FetchError> {
        let url = validate_url(&request.url)?;

        if request.rate_limit {
            self.limiter.acquire().await;
        }

        let timeout = request
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(self.config.timeout);
        let html = self.fetch_raw(url, timeout).await?;

        let extracted = self.extractor.extract(&html, url, request.extract_mode);
        tracing::debug!(
            "Extracted {} characters from {} as {}",
            extracted.content.chars().count(),
            url,
            extracted.mode.as_str()
        );

        Ok(FetchResult {
            url: request.url.clone(),
            content_length: extracted.content.chars().count(),
            content: extracted.content,
            extract_mode: extracted.mode,
        })
    }

    /// Performs the HTTP GET and returns the body as text
    ///
    /// Fails on non-success status, on a declared Content-Length above the
    /// configured cap (checked before reading the body), and on transport
    /// errors.
    async fn fetch_raw(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        tracing::debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length > self.config.max_content_length {
                return Err(FetchError::ContentTooLarge(length));
            }
        }

        response.text().await.map_err(FetchError::Transport)
    }
}

/// Checks that a URL is non-empty and uses an HTTP scheme
///
/// Runs before rate limiting so invalid input never consumes the shared
/// request budget.
fn validate_url(url: &str) -> Result<&str, FetchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(FetchError::EmptyUrl);
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(FetchError::UnsupportedScheme);
    }
    Ok(trimmed)
}
