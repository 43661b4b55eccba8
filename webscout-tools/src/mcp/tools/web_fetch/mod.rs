//! Web fetch tools for MCP operations
//!
//! This module provides page fetching with content extraction, converting
//! HTML to markdown, article text, or metadata for AI processing.

pub mod fetch;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all web fetch tools with the registry
pub fn register_web_fetch_tools(registry: &mut ToolRegistry) {
    registry.register(fetch::FetchTool::new());
}
