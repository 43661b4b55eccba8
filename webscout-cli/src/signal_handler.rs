//! Shutdown signal handling for long-running server commands

/// Wait for Ctrl+C
///
/// Returns after logging if the signal listener cannot be installed, so
/// callers proceed to shutdown instead of serving with no way to stop.
pub async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
