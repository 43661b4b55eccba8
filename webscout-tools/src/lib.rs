//! # WebScout Tools
//!
//! MCP (Model Context Protocol) server and tools exposing WebScout's web
//! search and fetch capabilities to AI assistants.
//!
//! ## Overview
//!
//! This crate wires the `webscout` library into an MCP server with three
//! tools:
//!
//! - **search**: Web search through a SearXNG metasearch backend
//! - **fetch**: Fetch a URL and extract its content as markdown, article
//!   text, raw HTML, or metadata
//! - **check_status**: Report availability of the search and fetch backends
//!
//! ## Architecture
//!
//! Tools are registered in a [`ToolRegistry`] and executed against a shared
//! [`ToolContext`] holding the search client and fetcher. [`McpServer`]
//! implements the rmcp `ServerHandler` trait on top of the registry, and
//! [`mcp::start_mcp_server`] runs it over stdio or streamable HTTP.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webscout_tools::mcp::{start_mcp_server, McpServerMode};
//!
//! let handle = start_mcp_server(McpServerMode::Http {
//!     host: None,
//!     port: Some(8000),
//! })
//! .await?;
//! println!("serving at {}", handle.url());
//! ```

#![warn(missing_docs)]

/// Model Context Protocol (MCP) server support
pub mod mcp;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use mcp::{register_status_tools, register_web_fetch_tools, register_web_search_tools};
pub use mcp::{McpServer, ToolContext, ToolRegistry};

/// Version of the webscout-tools crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
