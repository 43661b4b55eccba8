//! Model Context Protocol (MCP) support for WebScout
//!
//! This module implements an MCP server exposing web search and fetch tools.
//! The server can run over stdio (for editor and assistant integrations) or
//! as a streamable HTTP service.
//!
//! ## Module Organization
//!
//! - [`tool_registry`]: Tool trait, registry, and the shared tool context
//! - [`tools`]: The individual tool implementations
//! - [`server`]: The rmcp `ServerHandler` implementation
//! - [`unified_server`]: Transport selection and server lifecycle

pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod unified_server;

pub use server::{McpServer, ServerError};
pub use tool_registry::{
    register_status_tools, register_web_fetch_tools, register_web_search_tools, BaseToolImpl,
    McpTool, ToolContext, ToolRegistry,
};
pub use unified_server::{start_mcp_server, McpServerHandle, McpServerInfo, McpServerMode};
