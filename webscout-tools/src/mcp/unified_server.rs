//! Unified MCP server startup for stdio and HTTP transports
//!
//! Provides a single entry point, [`start_mcp_server`], that starts the
//! WebScout MCP server in the requested mode and returns a handle carrying
//! connection details and a shutdown channel.

use rmcp::serve_server;
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::server::{McpServer, ServerError};

/// Host used for HTTP servers when none is given
const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Transport mode for the MCP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpServerMode {
    /// Communicate over stdin/stdout
    Stdio,
    /// Serve streamable HTTP at `/mcp` with a `/health` endpoint
    Http {
        /// Bind host; `None` binds 127.0.0.1
        host: Option<String>,
        /// Bind port; `None` or `Some(0)` picks a free port
        port: Option<u16>,
    },
}

/// Details of a running MCP server
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Transport mode the server was started in
    pub mode: McpServerMode,
    /// URL clients connect to; `"stdio"` for the stdio transport
    pub connection_url: String,
    /// Bound port for HTTP servers
    pub port: Option<u16>,
}

/// Handle to a running MCP server
///
/// Dropping the handle of an HTTP server releases its shutdown channel and
/// stops the server.
pub struct McpServerHandle {
    info: McpServerInfo,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl McpServerHandle {
    fn new(info: McpServerInfo, shutdown_tx: Option<oneshot::Sender<()>>) -> Self {
        Self { info, shutdown_tx }
    }

    /// Details of the running server
    pub fn info(&self) -> &McpServerInfo {
        &self.info
    }

    /// URL clients use to connect
    pub fn url(&self) -> &str {
        &self.info.connection_url
    }

    /// Bound port for HTTP servers
    pub fn port(&self) -> Option<u16> {
        self.info.port
    }

    /// Request server shutdown
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub async fn shutdown(&mut self) -> Result<(), ServerError> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            tracing::info!("Shutting down MCP server");
            if shutdown_tx.send(()).is_err() {
                tracing::warn!("MCP server shutdown receiver already dropped");
            }
        } else {
            tracing::debug!("MCP server shutdown already requested");
        }
        Ok(())
    }
}

/// Start the MCP server in the given transport mode
pub async fn start_mcp_server(mode: McpServerMode) -> Result<McpServerHandle, ServerError> {
    match mode {
        McpServerMode::Stdio => start_stdio_server().await,
        McpServerMode::Http { host, port } => start_http_server(host, port).await,
    }
}

async fn start_stdio_server() -> Result<McpServerHandle, ServerError> {
    tracing::info!("Starting MCP server in stdio mode");
    let server = McpServer::new()?;

    tokio::spawn(async move {
        match serve_server(server, stdio()).await {
            Ok(running_service) => {
                tracing::info!("MCP stdio server started");
                match running_service.waiting().await {
                    Ok(quit_reason) => {
                        tracing::info!("MCP stdio server completed: {:?}", quit_reason)
                    }
                    Err(e) => tracing::error!("MCP stdio server task error: {}", e),
                }
            }
            Err(e) => tracing::error!("Failed to start MCP stdio server: {}", e),
        }
    });

    // The stdio transport runs until the client closes the stream; there is
    // no shutdown channel to signal.
    let info = McpServerInfo {
        mode: McpServerMode::Stdio,
        connection_url: "stdio".to_string(),
        port: None,
    };
    Ok(McpServerHandle::new(info, None))
}

async fn start_http_server(
    host: Option<String>,
    port: Option<u16>,
) -> Result<McpServerHandle, ServerError> {
    let host = host.unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());
    let server = McpServer::new()?;

    let listener = TcpListener::bind((host.as_str(), port.unwrap_or(0))).await?;
    let bound_port = listener.local_addr()?.port();

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", axum::routing::get(health_check));

    let connection_url = format!("http://{host}:{bound_port}/mcp");
    tracing::info!("Starting HTTP MCP server at {}", connection_url);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let serve = axum::serve(listener, router).with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });
        if let Err(e) = serve.await {
            tracing::error!("HTTP MCP server error: {}", e);
        } else {
            tracing::info!("HTTP MCP server stopped");
        }
    });

    let info = McpServerInfo {
        mode: McpServerMode::Http {
            host: Some(host),
            port,
        },
        connection_url,
        port: Some(bound_port),
    };
    Ok(McpServerHandle::new(info, Some(shutdown_tx)))
}

/// Health check endpoint for the HTTP transport
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": "webscout-mcp"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_http_server_with_fixed_port() {
        let mut handle = start_mcp_server(McpServerMode::Http {
            host: None,
            port: Some(18091),
        })
        .await
        .expect("server should start");

        assert_eq!(handle.port(), Some(18091));
        assert_eq!(handle.url(), "http://127.0.0.1:18091/mcp");

        handle.shutdown().await.expect("shutdown should succeed");
    }

    #[test_log::test(tokio::test)]
    async fn test_http_server_random_port() {
        let mut handle = start_mcp_server(McpServerMode::Http {
            host: None,
            port: None,
        })
        .await
        .expect("server should start");

        let port = handle.port().expect("http server should report a port");
        assert_ne!(port, 0);
        assert_eq!(handle.url(), format!("http://127.0.0.1:{port}/mcp"));

        handle.shutdown().await.expect("shutdown should succeed");
    }

    #[test_log::test(tokio::test)]
    async fn test_http_server_port_zero_picks_free_port() {
        let mut handle = start_mcp_server(McpServerMode::Http {
            host: None,
            port: Some(0),
        })
        .await
        .expect("server should start");

        assert_ne!(handle.port(), Some(0));

        handle.shutdown().await.expect("shutdown should succeed");
    }

    #[test_log::test(tokio::test)]
    async fn test_shutdown_is_idempotent() {
        let mut handle = start_mcp_server(McpServerMode::Http {
            host: None,
            port: Some(18092),
        })
        .await
        .expect("server should start");

        handle.shutdown().await.expect("first shutdown");
        handle.shutdown().await.expect("second shutdown");
    }

    #[test_log::test(tokio::test)]
    async fn test_port_already_in_use() {
        let _occupier = TcpListener::bind(("127.0.0.1", 18093))
            .await
            .expect("test listener should bind");

        let result = start_mcp_server(McpServerMode::Http {
            host: None,
            port: Some(18093),
        })
        .await;

        assert!(matches!(result, Err(ServerError::Io(_))));
    }

    #[test_log::test(tokio::test)]
    async fn test_server_info_consistency() {
        let mut handle = start_mcp_server(McpServerMode::Http {
            host: Some("127.0.0.1".to_string()),
            port: Some(18094),
        })
        .await
        .expect("server should start");

        let info = handle.info();
        assert!(matches!(info.mode, McpServerMode::Http { .. }));
        assert_eq!(info.connection_url, "http://127.0.0.1:18094/mcp");
        assert_eq!(info.port, Some(18094));

        handle.shutdown().await.expect("shutdown should succeed");
    }

    #[test_log::test(tokio::test)]
    async fn test_stdio_server_handle() {
        let mut handle = start_mcp_server(McpServerMode::Stdio)
            .await
            .expect("server should start");

        assert_eq!(handle.url(), "stdio");
        assert_eq!(handle.port(), None);
        assert_eq!(handle.info().mode, McpServerMode::Stdio);

        handle.shutdown().await.expect("shutdown should succeed");
    }
}
