//! Status check tool reporting backend availability

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

/// Tool reporting the availability of the search and fetch backends
#[derive(Default)]
pub struct CheckStatusTool;

impl CheckStatusTool {
    /// Creates a new instance of the CheckStatusTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CheckStatusTool {
    fn name(&self) -> &'static str {
        "check_status"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError> {
        let searxng_configured = context.search.is_configured();
        let searxng_healthy = context.search.check_health().await;

        tracing::debug!(
            "Status check: configured={}, healthy={}",
            searxng_configured,
            searxng_healthy
        );

        let payload = serde_json::json!({
            "searxng_configured": searxng_configured,
            "searxng_url": context.search.base_url(),
            "searxng_healthy": searxng_healthy,
            "web_fetch_available": true,
        });
        let text = serde_json::to_string_pretty(&payload).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize status: {e}"), None)
        })?;
        Ok(BaseToolImpl::create_success_response(text))
    }
}
