//! Test utilities for MCP tool and server tests

use crate::mcp::tool_registry::ToolContext;
use std::sync::Arc;
use std::time::Duration;
use webscout::{FetchConfig, SearchConfig, SearxngClient, WebFetcher};

/// Create a tool context with an unconfigured search client
///
/// The fetcher uses a short rate-limit interval so tests stay fast.
pub fn create_test_context() -> ToolContext {
    create_search_context(None)
}

/// Create a tool context whose search client points at the given base URL
///
/// Pass `None` for an unconfigured search client.
pub fn create_search_context(search_base_url: Option<&str>) -> ToolContext {
    let search_config = match search_base_url {
        Some(url) => SearchConfig::with_base_url(url),
        None => SearchConfig::default(),
    };
    let search = SearxngClient::with_config(search_config)
        .unwrap_or_else(|e| panic!("failed to build test search client: {e}"));

    let fetch_config = FetchConfig {
        min_request_interval: Duration::from_millis(10),
        ..FetchConfig::default()
    };
    let fetcher = WebFetcher::with_config(fetch_config)
        .unwrap_or_else(|e| panic!("failed to build test fetcher: {e}"));

    ToolContext::new(Arc::new(search), Arc::new(fetcher))
}
