//! Fetch tool for retrieving and extracting web content
//!
//! Fetches a URL through the shared rate-limited fetcher and returns the
//! extracted content as a JSON payload. Content is truncated for transport
//! while `content_length` reports the full extracted size, so callers can
//! tell when they are seeing a prefix.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use webscout::{truncate_chars, WebFetchRequest};

/// Maximum characters of extracted content returned through the tool
const TRANSPORT_CONTENT_LIMIT: usize = 10_000;

/// Tool for fetching web pages and extracting their content
#[derive(Default)]
pub struct FetchTool;

impl FetchTool {
    /// Creates a new instance of the FetchTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for FetchTool {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL to fetch (must be http or https)"
                },
                "extract_mode": {
                    "type": "string",
                    "description": "Content extraction mode (default: markdown)",
                    "enum": ["markdown", "article", "raw", "metadata"],
                    "default": "markdown"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let request: WebFetchRequest = BaseToolImpl::parse_arguments(arguments)?;

        tracing::debug!(
            "Fetching web content from {} (mode: {})",
            request.url,
            request.extract_mode.as_str()
        );

        match context.fetcher.fetch(&request).await {
            Ok(result) => {
                tracing::info!(
                    "Web fetch completed: {} ({} chars, mode: {})",
                    result.url,
                    result.content_length,
                    result.extract_mode.as_str()
                );
                let payload = serde_json::json!({
                    "url": result.url,
                    "content": truncate_chars(&result.content, TRANSPORT_CONTENT_LIMIT),
                    "content_length": result.content_length,
                    "extract_mode": result.extract_mode,
                    "truncated": result.content_length > TRANSPORT_CONTENT_LIMIT,
                });
                let text = serde_json::to_string_pretty(&payload).map_err(|e| {
                    McpError::internal_error(format!("Failed to serialize result: {e}"), None)
                })?;
                Ok(BaseToolImpl::create_success_response(text))
            }
            Err(e) => {
                tracing::warn!("Web fetch failed for {}: {}", request.url, e);
                let payload = serde_json::json!({
                    "error": e.to_string(),
                    "url": request.url,
                });
                let text = serde_json::to_string_pretty(&payload)
                    .unwrap_or_else(|_| e.to_string());
                Ok(BaseToolImpl::create_error_response(text, None))
            }
        }
    }
}
