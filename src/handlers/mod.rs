//! Route handlers, one per flaw class.
//!
//! # Data Flow
//! ```text
//! Query pairs / Path extractor (raw text, never validated)
//!     → first value per name, later duplicates ignored
//!     → handler-specific unsafe operation on the blocking pool
//!     → Ok(body)  → 200
//!     → Err(e)    → 500 with the error text as body
//! ```
//!
//! # Design Decisions
//! - Every failure is caught in the handler and rendered; none panics
//! - `/divide` renders its own error with status 200
//! - Shell, SQLite, file and decode work runs under `spawn_blocking`, so a
//!   long-running request never starves the async workers; no timeout applies

pub mod account;
pub mod divide;
pub mod page;
pub mod pickle;
pub mod read;
pub mod system;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::marshal::DecodeError;
use crate::store::StoreError;

/// Failure inside a handler, rendered verbatim into the response.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("missing query parameter '{0}'")]
    MissingParam(&'static str),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("handler task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Result type for handlers that fail with a 500.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Raw query pairs in request order, duplicates kept.
pub type QueryPairs = Vec<(String, String)>;

/// First value supplied for `name`.
pub(crate) fn first(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
}

/// Take a required query parameter.
pub(crate) fn required(pairs: &[(String, String)], name: &'static str) -> HandlerResult<String> {
    first(pairs, name).ok_or(HandlerError::MissingParam(name))
}

/// Run blocking work on the blocking pool and wait for it, however long.
pub(crate) async fn blocking<T, F>(work: F) -> HandlerResult<T>
where
    F: FnOnce() -> HandlerResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}
