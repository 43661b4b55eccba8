//! Core types for web search and fetch functionality
//!
//! This module defines the data structures used for web search requests and
//! results, and for web fetch requests and extracted content.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Web Fetch Types
// ============================================================================

/// Content extraction mode for fetched pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Convert the page to markdown, falling back to article extraction when
    /// the converter yields nothing
    #[default]
    Markdown,
    /// Extract the main article text with boilerplate removed
    Article,
    /// Return the raw HTML without extraction
    Raw,
    /// Extract page metadata: title, description, Open Graph tags
    Metadata,
}

impl ExtractMode {
    /// Wire name of the mode, matching its serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractMode::Markdown => "markdown",
            ExtractMode::Article => "article",
            ExtractMode::Raw => "raw",
            ExtractMode::Metadata => "metadata",
        }
    }
}

/// Request to fetch a web page and extract its content
///
/// # Examples
///
/// Basic fetch with defaults:
/// ```ignore
/// WebFetchRequest::new("https://example.com/article")
/// ```
///
/// Raw HTML without rate limiting:
/// ```ignore
/// WebFetchRequest {
///     url: "https://example.com".to_string(),
///     extract_mode: ExtractMode::Raw,
///     rate_limit: false,
///     timeout: None,
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebFetchRequest {
    /// The URL to fetch content from (must be an HTTP or HTTPS URL)
    pub url: String,

    /// Content extraction mode (optional, defaults to markdown)
    #[serde(default)]
    pub extract_mode: ExtractMode,

    /// Whether this request waits on the shared rate limit (optional, defaults to true)
    #[serde(default = "default_rate_limit")]
    pub rate_limit: bool,

    /// Request timeout in seconds (optional, defaults to 15 seconds)
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl WebFetchRequest {
    /// Creates a fetch request for `url` with default mode, rate limiting, and timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extract_mode: ExtractMode::default(),
            rate_limit: DEFAULT_RATE_LIMIT,
            timeout: None,
        }
    }
}

/// Default value for the rate_limit option
const DEFAULT_RATE_LIMIT: bool = true;

fn default_rate_limit() -> bool {
    DEFAULT_RATE_LIMIT
}

/// Result of a fetch-and-extract operation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchResult {
    /// The URL as requested, not redirect-resolved
    pub url: String,

    /// Extracted content
    pub content: String,

    /// Length of `content` in characters
    pub content_length: usize,

    /// The extraction mode actually used; differs from the requested mode
    /// when markdown conversion fell back to article extraction
    pub extract_mode: ExtractMode,
}

// ============================================================================
// Web Search Types
// ============================================================================

/// Time range filter for search results
///
/// Unrecognized input strings are coerced to [`RecencyFilter::AllTime`]
/// rather than rejected; see [`RecencyFilter::parse_lenient`]. Domain filter
/// validation is deliberately stricter (a bad domain fails the search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecencyFilter {
    /// Results from all time periods
    #[default]
    AllTime,
    /// Results from the last day
    Day,
    /// Results from the last week
    Week,
    /// Results from the last month
    Month,
    /// Results from the last year
    Year,
}

impl RecencyFilter {
    /// Parses a recency string, coercing unrecognized values to all_time
    /// with a warning instead of failing
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "all_time" => RecencyFilter::AllTime,
            "day" => RecencyFilter::Day,
            "week" => RecencyFilter::Week,
            "month" => RecencyFilter::Month,
            "year" => RecencyFilter::Year,
            other => {
                tracing::warn!("Invalid recency '{}', defaulting to 'all_time'", other);
                RecencyFilter::AllTime
            }
        }
    }

    /// Value for the backend `time_range` query parameter; `None` means the
    /// parameter is omitted entirely
    pub fn time_range_param(&self) -> Option<&'static str> {
        match self {
            RecencyFilter::AllTime => None,
            RecencyFilter::Day => Some("day"),
            RecencyFilter::Week => Some("week"),
            RecencyFilter::Month => Some("month"),
            RecencyFilter::Year => Some("year"),
        }
    }
}

/// Request structure for web search operations
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchRequest {
    /// The search query string
    pub query: String,

    /// Maximum number of results to return (optional, defaults to 5)
    #[serde(default)]
    pub max_results: Option<usize>,

    /// Restrict results to a single domain, e.g. "wikipedia.org" (optional)
    #[serde(default)]
    pub domain_filter: Option<String>,

    /// Recency filter: one of day, week, month, year, all_time (optional,
    /// defaults to all_time; unrecognized values are coerced to all_time)
    #[serde(default)]
    pub recency: Option<String>,
}

impl WebSearchRequest {
    /// Creates a search request for `query` with default result count and no filters
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: None,
            domain_filter: None,
            recency: None,
        }
    }
}

/// Default number of search results to return
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Individual search result returned by the metasearch backend
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    /// Page title
    pub title: String,

    /// Page URL
    pub url: String,

    /// Page description/snippet
    pub snippet: String,

    /// Publication date as reported by the backend; `None` when the backend
    /// omitted the field, which is distinct from an empty string
    pub published_date: Option<String>,
}
