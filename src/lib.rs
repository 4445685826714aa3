//! Deliberately vulnerable HTTP fixture library.
//!
//! Each route carries exactly one flaw class with a deterministic trigger,
//! for exercising static analyzers, dynamic scanners, and training material.
//! Do not expose it outside a sandbox.

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;
pub mod routing;

// Fixture data and unsafe primitives
pub mod marshal;
pub mod repr;
pub mod secrets;
pub mod shell;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::FixtureConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
