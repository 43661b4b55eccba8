//! WebScout
//!
//! Core crate for web search and fetch functionality.
//! Provides SearXNG-backed metasearch with domain and recency filtering,
//! URL fetching with markdown, article, raw, and metadata extraction,
//! shared request rate limiting, and backend health checks.
//!
//! This crate contains pure web domain logic with no MCP protocol
//! dependency. The MCP tool adapters live in `webscout-tools`.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod limiter;
pub mod search;
pub mod types;

// Re-export key types
pub use config::{FetchConfig, SearchConfig, SEARXNG_URL_ENV};
pub use extract::{truncate_chars, Extracted, Extractor, MarkdownDelegate};
pub use fetch::{FetchError, WebFetcher};
pub use limiter::{RateLimiter, MIN_REQUEST_INTERVAL};
pub use search::{validate_domain_filter, web_search, SearchError, SearxngClient};
pub use types::{
    ExtractMode, FetchResult, RecencyFilter, SearchResult, WebFetchRequest, WebSearchRequest,
    DEFAULT_MAX_RESULTS,
};
