//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Seed storage → Start exporter → Bind listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C or trigger() → Stop accepting → Drain in-flight → Exit
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
