//! MCP server implementation for WebScout
//!
//! This module provides the MCP server that exposes the web search and
//! fetch tools to clients. The server holds a tool registry and a shared
//! tool context; transports are handled by [`super::unified_server`].

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;
use tokio::sync::RwLock;
use webscout::{SearxngClient, WebFetcher};

use super::tool_registry::{
    register_status_tools, register_web_fetch_tools, register_web_search_tools, ToolContext,
    ToolRegistry,
};

/// Instructions presented to MCP clients during initialization
const SERVER_INSTRUCTIONS: &str = "Web search and fetch tools for AI assistants.

Tools:
- search: Search the web through a SearXNG metasearch instance. Requires the SEARXNG_URL environment variable.
- fetch: Fetch a URL and extract its content as markdown, article text, raw HTML, or metadata.
- check_status: Report whether the search backend is configured and healthy.";

/// Errors from constructing or starting the MCP server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The search client could not be built
    #[error("Search client initialization failed: {0}")]
    Search(#[from] webscout::SearchError),
    /// The web fetcher could not be built
    #[error("Fetcher initialization failed: {0}")]
    Fetch(#[from] webscout::FetchError),
    /// A transport socket could not be bound or inspected
    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates the server capabilities advertised to clients
fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        prompts: None,
        tools: Some(ToolsCapability {
            list_changed: Some(true),
        }),
        resources: None,
        logging: None,
        completions: None,
        experimental: None,
    }
}

/// Creates the server implementation metadata
fn create_server_implementation() -> Implementation {
    Implementation {
        name: "WebScout".into(),
        version: crate::VERSION.into(),
        icons: None,
        title: Some("WebScout MCP Server".into()),
        website_url: Some("https://github.com/webscout/webscout".into()),
    }
}

/// MCP server exposing the WebScout tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<RwLock<ToolRegistry>>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server with backends configured from the environment
    ///
    /// Reads `SEARXNG_URL` for the search backend. An unset variable still
    /// yields a working server; the search tool then reports that it is
    /// unconfigured instead of failing requests.
    pub fn new() -> Result<Self, ServerError> {
        let search = SearxngClient::new()?;
        let fetcher = WebFetcher::new()?;
        Ok(Self::with_backends(Arc::new(search), Arc::new(fetcher)))
    }

    /// Create a server with explicit backend handles
    pub fn with_backends(search: Arc<SearxngClient>, fetcher: Arc<WebFetcher>) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_web_search_tools(&mut tool_registry);
        register_web_fetch_tools(&mut tool_registry);
        register_status_tools(&mut tool_registry);
        tracing::debug!("Registered {} MCP tools", tool_registry.len());

        Self {
            tool_registry: Arc::new(RwLock::new(tool_registry)),
            tool_context: Arc::new(ToolContext::new(search, fetcher)),
        }
    }

    /// Names of the registered tools
    pub async fn list_tool_names(&self) -> Vec<String> {
        self.tool_registry.read().await.list_tool_names()
    }

    /// Execute a registered tool directly, outside an MCP session
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<CallToolResult, McpError> {
        let registry = self.tool_registry.read().await;
        let tool = registry.get_tool(name).ok_or_else(|| {
            tracing::error!("Unknown tool requested: {}", name);
            McpError::invalid_request(format!("Unknown tool: {name}"), None)
        })?;
        tool.execute(arguments, &self.tool_context).await
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        tracing::info!(
            "🚀 MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: create_server_capabilities(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            server_info: create_server_implementation(),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tool_registry.read().await.list_tools();
        tracing::debug!("Listing {} available tools", tools.len());
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        tracing::info!("🔧 Executing tool: {}", request.name);
        tracing::debug!("Tool arguments: {:?}", arguments);
        self.execute_tool(&request.name, arguments).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: create_server_capabilities(),
            server_info: create_server_implementation(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }
}
