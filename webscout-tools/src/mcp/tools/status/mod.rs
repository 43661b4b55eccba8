//! Status tools for MCP operations
//!
//! This module reports backend availability so assistants can decide whether
//! search is usable before issuing queries.

pub mod check;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all status tools with the registry
pub fn register_status_tools(registry: &mut ToolRegistry) {
    registry.register(check::CheckStatusTool::new());
}
