//! Serve command implementation
//!
//! Starts the WebScout MCP server, speaking the MCP protocol over stdio
//! (default) or streamable HTTP. The stdio path blocks until the client
//! disconnects; the HTTP path blocks until a shutdown signal arrives.

use crate::cli::ServeSubcommand;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use crate::signal_handler::wait_for_shutdown;
use webscout_tools::mcp::McpServerMode;

/// Handle the serve command
///
/// # Returns
///
/// Returns an exit code:
/// - 0: Server started and stopped cleanly
/// - 1: Server stopped unexpectedly or failed to shut down cleanly
/// - 2: Server failed to start
pub async fn handle_command(subcommand: Option<ServeSubcommand>) -> i32 {
    match subcommand {
        Some(ServeSubcommand::Http { port, host }) => handle_http_serve(host, port).await,
        None => handle_stdio_serve().await,
    }
}

fn http_mode(host: String, port: u16) -> McpServerMode {
    McpServerMode::Http {
        host: Some(host),
        port: Some(port),
    }
}

/// Handle HTTP serve mode
async fn handle_http_serve(host: String, port: u16) -> i32 {
    use webscout_tools::mcp::start_mcp_server;

    tracing::debug!("Starting MCP server on {}:{}", host, port);

    let mut handle = match start_mcp_server(http_mode(host, port)).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("Failed to start HTTP MCP server: {}", e);
            eprintln!("Failed to start HTTP MCP server: {}", e);
            return EXIT_ERROR;
        }
    };

    if port == 0 {
        println!(
            "✅ MCP HTTP server running on {} (bound to random port: {}). 💡 Use Ctrl+C to stop.",
            handle.url(),
            handle.port().unwrap_or(0)
        );
    } else {
        println!(
            "✅ MCP HTTP server running on {}. 💡 Use Ctrl+C to stop.",
            handle.url()
        );
    }

    wait_for_shutdown().await;

    println!("🛑 Shutting down server...");
    if let Err(e) = handle.shutdown().await {
        tracing::error!("Failed to shutdown server gracefully: {}", e);
        return EXIT_WARNING;
    }

    println!("✅ Server stopped");
    EXIT_SUCCESS
}

/// Handle stdio serve mode
async fn handle_stdio_serve() -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use webscout_tools::McpServer;

    tracing::debug!("Starting MCP server in stdio mode");

    let server = match McpServer::new() {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e);
            eprintln!("Failed to create MCP server: {}", e);
            return EXIT_ERROR;
        }
    };

    let running_service = match serve_server(server, stdio()).await {
        Ok(service) => {
            tracing::info!("MCP server started successfully");
            service
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            eprintln!("MCP server error: {}", e);
            return EXIT_WARNING;
        }
    };

    // Runs until the client disconnects, the server is cancelled, or a
    // serious error occurs.
    match running_service.waiting().await {
        Ok(quit_reason) => {
            tracing::info!("MCP server stopped: {:?}", quit_reason);
        }
        Err(e) => {
            tracing::error!("MCP server task error: {}", e);
            return EXIT_WARNING;
        }
    }

    tracing::info!("MCP server shutting down gracefully");
    EXIT_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_mode_carries_host_and_port() {
        let mode = http_mode("127.0.0.1".to_string(), 8000);
        assert_eq!(
            mode,
            McpServerMode::Http {
                host: Some("127.0.0.1".to_string()),
                port: Some(8000),
            }
        );
    }

    #[test]
    fn test_http_mode_preserves_port_zero() {
        // Port zero is passed through so the server picks a free port
        let mode = http_mode("127.0.0.1".to_string(), 0);
        assert_eq!(
            mode,
            McpServerMode::Http {
                host: Some("127.0.0.1".to_string()),
                port: Some(0),
            }
        );
    }
}
