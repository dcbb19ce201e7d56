use dioxus_logger::tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::server::{
    bot::command::builtin_modules,
    config::Config,
    error::AppError,
    service::command::{loader::load_commands, registry::CommandRegistry},
};

/// Builds the command registry shared by all bots.
///
/// Invalid or colliding command modules are logged and skipped by the loader, so this
/// never fails; an empty registry is only logged.
pub fn build_registry() -> Arc<CommandRegistry> {
    let (registry, report) = load_commands(builtin_modules());

    if registry.is_empty() {
        tracing::warn!("No commands loaded, the bots will ignore every message");
    } else if report.errors > 0 {
        tracing::warn!("{} command module(s) failed to load", report.errors);
    }

    Arc::new(registry)
}

/// Binds the health server listener on all interfaces.
///
/// # Arguments
/// - `config` - Application configuration containing the port
///
/// # Returns
/// - `Ok(TcpListener)` - Bound listener
/// - `Err(AppError::IoErr)` - The port could not be bound
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Health check server listening on port {}", config.port);

    Ok(listener)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
