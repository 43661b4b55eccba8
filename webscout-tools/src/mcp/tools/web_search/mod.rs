//! Web search tools for MCP operations
//!
//! This module provides search capability through a SearXNG metasearch
//! backend, returning structured results suitable for AI processing.

pub mod search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all web search tools with the registry
pub fn register_web_search_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchTool::new());
}
