//! Graceful shutdown signal handling

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// Extra time in-flight requests get to finish once a signal arrives.
///
/// Covers a checkout that is still waiting on its payment authorisation.
const GRACE_PERIOD_PADDING: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Wait for a shutdown signal, then stop accepting connections and drain.
pub(crate) async fn listen(
    handle: ServerHandle,
    payment_delay: Duration,
) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    let grace = payment_delay.saturating_add(GRACE_PERIOD_PADDING);

    info!(
        signal,
        grace_ms = grace.as_millis(),
        "shutdown signal received, draining in-flight requests"
    );

    handle.stop_graceful(Some(grace));

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            Ok("ctrl_c")
        }
        _ = terminate.recv() => Ok("terminate"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

    Ok("ctrl_c")
}
