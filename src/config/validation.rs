//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate that listener and metrics addresses parse
//! - Reject empty storage paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FixtureConfig → Result<(), Vec<ValidationError>>
//! - Request parameters are never validated; only startup configuration is

use std::net::SocketAddr;

use crate::config::schema::FixtureConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration, collecting every error.
pub fn validate_config(config: &FixtureConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("invalid socket address '{}': {}", config.listener.bind_address, e),
        });
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            errors.push(ValidationError {
                field: "observability.metrics_address",
                message: format!(
                    "invalid socket address '{}': {}",
                    config.observability.metrics_address, e
                ),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ValidationError {
            field: "storage.database_path",
            message: "must not be empty".to_string(),
        });
    }

    if config.storage.files_dir.trim().is_empty() {
        errors.push(ValidationError {
            field: "storage.files_dir",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
