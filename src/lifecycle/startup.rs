//! Startup orchestration.
//!
//! # Responsibilities
//! - Seed fixture storage when configured
//! - Start the metrics exporter when enabled
//!
//! # Design Decisions
//! - Fail fast: a seeding error aborts startup
//! - Listeners start last, in main.rs

use crate::config::FixtureConfig;
use crate::observability::metrics;
use crate::store::{self, SeedError};

/// Prepare storage and background services before binding.
pub fn prepare(config: &FixtureConfig) -> Result<(), SeedError> {
    if config.storage.seed_on_start {
        store::seed(&config.storage)?;
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    Ok(())
}
