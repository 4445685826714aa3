//! Fixture data subsystem.
//!
//! # Data Flow
//! ```text
//! accounts.rs  static table, read by /account/{id}
//! users.rs     SQLite file, queried by /users
//! files.rs     base directory, read by /read
//! ```
//!
//! # Design Decisions
//! - Account table is immutable static data
//! - Database and files directory are created by `seed` out of band
//!   (startup flag or the `seed` subcommand), never by the handlers

pub mod accounts;
pub mod files;
pub mod users;

use std::path::Path;

use crate::config::StorageConfig;

pub use accounts::Account;
pub use users::StoreError;

/// Error from seeding the fixture storage.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to seed database: {0}")]
    Database(#[from] StoreError),
    #[error("failed to seed files directory: {0}")]
    Files(#[from] std::io::Error),
}

/// Seed both the database and the files directory.
pub fn seed(config: &StorageConfig) -> Result<(), SeedError> {
    users::seed(Path::new(&config.database_path))?;
    files::seed(Path::new(&config.files_dir))?;
    Ok(())
}
