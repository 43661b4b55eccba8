//! Tool registry for managing MCP tools
//!
//! This module provides the infrastructure that tool implementations plug
//! into: the [`McpTool`] trait, the [`ToolRegistry`] that the server lists
//! and dispatches from, the shared [`ToolContext`], and [`BaseToolImpl`]
//! helpers for argument parsing and response construction.

use async_trait::async_trait;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::ErrorData as McpError;
use std::collections::HashMap;
use std::sync::Arc;
use webscout::{SearxngClient, WebFetcher};

/// Context shared by all tool executions
///
/// Holds the search client and web fetcher that tools operate on.
#[derive(Clone)]
pub struct ToolContext {
    /// SearXNG search client
    pub search: Arc<SearxngClient>,
    /// Web page fetcher
    pub fetcher: Arc<WebFetcher>,
}

impl ToolContext {
    /// Create a new tool context from backend handles
    pub fn new(search: Arc<SearxngClient>, fetcher: Arc<WebFetcher>) -> Self {
        Self { search, fetcher }
    }
}

/// Trait for tools exposed through the MCP protocol
///
/// Each tool provides its name, a description shown to clients, a JSON
/// schema for its arguments, and an async execute method.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as registered with the MCP server
    fn name(&self) -> &'static str;

    /// Description presented to MCP clients
    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult, McpError>;
}

/// Registry of available MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any existing tool with the same name
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Names of all registered tools
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Convert registered tools into rmcp tool descriptors
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };
                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }
}

/// Base implementation helpers shared by tool implementations
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed request
    ///
    /// # Arguments
    ///
    /// * `arguments` - The raw argument map from the MCP request
    ///
    /// # Returns
    ///
    /// * `Result<T, McpError>` - The parsed arguments or a parsing error
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_request(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with text content
    pub fn create_success_response<S: Into<String>>(message: S) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: message.into(),
                    meta: None,
                }),
                None,
            )],
            is_error: Some(false),
            structured_content: None,
            meta: None,
        }
    }

    /// Create an error response with optional details
    pub fn create_error_response<S: Into<String>>(
        error: S,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: error_text,
                    meta: None,
                }),
                None,
            )],
            is_error: Some(true),
            structured_content: None,
            meta: None,
        }
    }
}

/// Register all web search tools with the registry
pub fn register_web_search_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::web_search::register_web_search_tools(registry);
}

/// Register all web fetch tools with the registry
pub fn register_web_fetch_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::web_fetch::register_web_fetch_tools(registry);
}

/// Register all status tools with the registry
pub fn register_status_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::status::register_status_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    impl MockTool {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                description: "A mock tool for testing",
            }
        }
    }

    #[async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": {"type": "string"}
                },
                "required": []
            })
        }

        async fn execute(
            &self,
            arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> Result<CallToolResult, McpError> {
            let message = arguments
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("default");
            Ok(BaseToolImpl::create_success_response(format!(
                "Mock response: {message}"
            )))
        }
    }

    fn response_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text_content) => &text_content.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_tool_names().is_empty());
    }

    #[test]
    fn test_tool_registration() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::new("test_tool"));

        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert!(registry.get_tool("test_tool").is_some());
    }

    #[test]
    fn test_get_nonexistent_tool() {
        let registry = ToolRegistry::new();
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_multiple_tool_registration() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::new("tool1"));
        registry.register(MockTool::new("tool2"));

        assert_eq!(registry.len(), 2);
        let names = registry.list_tool_names();
        assert!(names.contains(&"tool1".to_string()));
        assert!(names.contains(&"tool2".to_string()));
    }

    #[test]
    fn test_list_tools_exposes_schemas() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::new("schema_tool"));

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "schema_tool");
        assert!(tools[0].input_schema.contains_key("properties"));
    }

    #[tokio::test]
    async fn test_tool_execution() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool::new("test_tool"));
        let context = create_test_context();

        let tool = registry.get_tool("test_tool").unwrap();
        let mut arguments = serde_json::Map::new();
        arguments.insert(
            "message".to_string(),
            serde_json::Value::String("hello".to_string()),
        );

        let result = tool.execute(arguments, &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(response_text(&result), "Mock response: hello");
    }

    #[test]
    fn test_parse_arguments_success() {
        #[derive(serde::Deserialize)]
        struct TestArgs {
            message: String,
        }

        let mut arguments = serde_json::Map::new();
        arguments.insert(
            "message".to_string(),
            serde_json::Value::String("hello".to_string()),
        );

        let args: TestArgs = BaseToolImpl::parse_arguments(arguments).unwrap();
        assert_eq!(args.message, "hello");
    }

    #[test]
    fn test_parse_arguments_invalid() {
        #[derive(Debug, serde::Deserialize)]
        struct TestArgs {
            #[allow(dead_code)]
            required_field: String,
        }

        let arguments = serde_json::Map::new();
        let result: Result<TestArgs, McpError> = BaseToolImpl::parse_arguments(arguments);

        let error = result.unwrap_err();
        assert!(error.message.contains("Invalid arguments"));
    }

    #[test]
    fn test_create_success_response() {
        let result = BaseToolImpl::create_success_response("operation completed");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(response_text(&result), "operation completed");
    }

    #[test]
    fn test_create_error_response_without_details() {
        let result = BaseToolImpl::create_error_response("something failed", None);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "something failed");
    }

    #[test]
    fn test_create_error_response_with_details() {
        let result = BaseToolImpl::create_error_response(
            "something failed",
            Some("connection refused".to_string()),
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "something failed: connection refused");
    }
}
