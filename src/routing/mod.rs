//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query)
//!     → router.rs (static table lookup via axum)
//!     → handlers::* (one per flaw class)
//!
//! Route Compilation (at startup):
//!     ROUTES
//!     → build() folds each entry into an axum Router
//!     → Router frozen and shared by every connection
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same path always reaches the same handler

pub mod router;

pub use router::{build, lookup, Route, VulnClass, ROUTES};
