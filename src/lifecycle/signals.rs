//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGINT (Ctrl+C) into a shutdown trigger

use crate::lifecycle::shutdown::Shutdown;

/// Trigger `shutdown` when Ctrl+C arrives.
pub fn spawn_ctrl_c(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.trigger(),
            Err(e) => tracing::error!(error = %e, "Failed to install Ctrl+C handler"),
        }
    });
}
