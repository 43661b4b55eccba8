//! Search tool backed by SearXNG
//!
//! Accepts a query with optional result count, domain, and recency filters,
//! and returns search results as a pretty-printed JSON array. Backend
//! failures are reported as an error payload rather than a protocol error so
//! the calling assistant can read and relay them.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use webscout::{WebSearchRequest, DEFAULT_MAX_RESULTS};

/// Largest accepted value for `max_results`; higher requests are clamped
const MAX_RESULTS_CEILING: usize = 20;

/// Error message returned when no SearXNG backend is configured
const NOT_CONFIGURED_MESSAGE: &str =
    "SearXNG not configured. Set SEARXNG_URL environment variable.";

/// Tool for searching the web through SearXNG
#[derive(Default)]
pub struct SearchTool;

impl SearchTool {
    /// Creates a new instance of the SearchTool
    pub fn new() -> Self {
        Self
    }
}

/// Clamps the requested result count into the accepted 1..=20 range
fn clamp_max_results(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_RESULTS_CEILING)
}

/// Builds the `{"error": ...}` payload with the MCP error flag set
fn error_response(message: &str) -> CallToolResult {
    let payload = serde_json::json!({ "error": message });
    BaseToolImpl::create_error_response(
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| message.to_string()),
        None,
    )
}

#[async_trait]
impl McpTool for SearchTool {
    fn name(&self) -> &'static str {
        "search"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "max_results": {
                    "type": "integer",
                    "description": format!(
                        "Maximum number of results to return (1-{MAX_RESULTS_CEILING}, default {DEFAULT_MAX_RESULTS})"
                    ),
                    "minimum": 1,
                    "maximum": MAX_RESULTS_CEILING,
                    "default": DEFAULT_MAX_RESULTS
                },
                "domain_filter": {
                    "type": "string",
                    "description": "Restrict results to a single domain, e.g. 'wikipedia.org'"
                },
                "recency": {
                    "type": "string",
                    "description": "Time filter: 'day', 'week', 'month', 'year', or 'all_time' (default)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let mut request: WebSearchRequest = BaseToolImpl::parse_arguments(arguments)?;
        request.max_results = Some(clamp_max_results(request.max_results));

        tracing::debug!(
            "Starting web search: '{}' (max_results: {:?}, domain: {:?}, recency: {:?})",
            request.query,
            request.max_results,
            request.domain_filter,
            request.recency
        );

        if !context.search.is_configured() {
            tracing::warn!("Search requested but SEARXNG_URL is not set");
            return Ok(error_response(NOT_CONFIGURED_MESSAGE));
        }

        match context.search.search(&request).await {
            Ok(results) => {
                tracing::info!(
                    "Web search completed: {} results for '{}'",
                    results.len(),
                    request.query
                );
                let text = serde_json::to_string_pretty(&results).map_err(|e| {
                    McpError::internal_error(format!("Failed to serialize results: {e}"), None)
                })?;
                Ok(BaseToolImpl::create_success_response(text))
            }
            Err(e) => {
                tracing::warn!("Web search failed for '{}': {}", request.query, e);
                Ok(error_response(&e.to_string()))
            }
        }
    }
}
