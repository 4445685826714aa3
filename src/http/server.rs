//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the static route table
//! - Wire up ambient layers (tracing, request ID, metrics)
//! - Bind server to listener
//! - Serve until the shutdown signal fires
//!
//! # Design Decisions
//! - No timeout, body limit, or rate limit layers on the handler path
//! - Handlers run to completion even if the client disconnects

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::FixtureConfig;
use crate::http::request;
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::routing::{self, ROUTES};

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<FixtureConfig>,
}

/// HTTP server for the fixture.
pub struct HttpServer {
    router: Router,
    config: Arc<FixtureConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FixtureConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        routing::build(ROUTES)
            .with_state(state)
            .layer(middleware::from_fn(record_metrics))
            .layer(request::propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(request::set_request_id_layer())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            debug = self.config.debug,
            routes = ROUTES.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Record request count and latency under the matched route pattern.
async fn record_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "none".to_owned());

    let response = next.run(request).await;

    let class = routing::lookup(&route).map_or("none", |r| r.class.as_str());
    tracing::debug!(route = %route, class, status = %response.status(), "Request handled");
    metrics::record_request(&route, class, response.status().as_u16(), start);
    response
}
