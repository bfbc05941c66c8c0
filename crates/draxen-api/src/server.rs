//! Listener setup and graceful shutdown.

use std::io::ErrorKind;

use anyhow::{Context, bail};
use tokio::net::TcpListener;

/// Ports tried (starting with the requested one) before giving up.
pub const MAX_PORT_ATTEMPTS: u16 = 10;

/// Bind `host:port`, moving to the next port while the current one is taken.
///
/// Only "address in use" triggers a retry; any other bind failure is returned
/// immediately.
pub async fn bind_with_fallback(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    for offset in 0..MAX_PORT_ATTEMPTS {
        let Some(candidate) = port.checked_add(offset) else {
            break;
        };

        match TcpListener::bind((host, candidate)).await {
            Ok(listener) => {
                if offset > 0 {
                    tracing::warn!(requested = port, bound = candidate, "Requested port busy, using fallback");
                }
                return Ok(listener);
            }
            Err(err) if err.kind() == ErrorKind::AddrInUse => {
                tracing::debug!(port = candidate, "Port in use");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to bind {host}:{candidate}"));
            }
        }
    }

    bail!("no free port in {MAX_PORT_ATTEMPTS} attempts starting at {host}:{port}")
}

/// Wait for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
