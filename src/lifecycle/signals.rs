//! OS signal handling.

/// Resolve on Ctrl-C (SIGINT).
///
/// Never resolves if the handler cannot be installed.
pub async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Interrupt received, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
