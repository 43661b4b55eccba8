//! MCP tool implementations
//!
//! Tools are organized by category, with each tool in its own submodule
//! alongside its `description.md`.

pub mod status;
pub mod web_fetch;
pub mod web_search;
