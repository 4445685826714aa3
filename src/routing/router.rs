//! Route table and dispatch.
//!
//! # Responsibilities
//! - Store the static path pattern → handler table
//! - Compile the table into an axum `Router` once at startup
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - One handler per path; no middleware between router and handler
//! - Unknown paths fall through to axum's default 404

use std::fmt;

use axum::{routing::get, routing::MethodRouter, Router};

use crate::handlers;
use crate::http::server::AppState;

/// Flaw class a route demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VulnClass {
    SqlInjection,
    CommandInjection,
    InsecureDeserialization,
    PathTraversal,
    ReflectedXss,
    InsecureDirectObjectReference,
    InformationDisclosure,
}

impl VulnClass {
    /// Short label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            VulnClass::SqlInjection => "sql_injection",
            VulnClass::CommandInjection => "command_injection",
            VulnClass::InsecureDeserialization => "insecure_deserialization",
            VulnClass::PathTraversal => "path_traversal",
            VulnClass::ReflectedXss => "reflected_xss",
            VulnClass::InsecureDirectObjectReference => "idor",
            VulnClass::InformationDisclosure => "information_disclosure",
        }
    }
}

impl fmt::Display for VulnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the route table.
pub struct Route {
    /// Path pattern in axum syntax.
    pub path: &'static str,
    pub class: VulnClass,
    pub handler: fn() -> MethodRouter<AppState>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("class", &self.class)
            .finish()
    }
}

/// Every route the service exposes. All are GET.
pub static ROUTES: &[Route] = &[
    Route {
        path: "/users",
        class: VulnClass::SqlInjection,
        handler: || get(handlers::users::get_user),
    },
    Route {
        path: "/system",
        class: VulnClass::CommandInjection,
        handler: || get(handlers::system::execute_command),
    },
    Route {
        path: "/pickle",
        class: VulnClass::InsecureDeserialization,
        handler: || get(handlers::pickle::load_data),
    },
    Route {
        path: "/read",
        class: VulnClass::PathTraversal,
        handler: || get(handlers::read::read_file),
    },
    Route {
        path: "/page",
        class: VulnClass::ReflectedXss,
        handler: || get(handlers::page::render_page),
    },
    Route {
        path: "/account/{id}",
        class: VulnClass::InsecureDirectObjectReference,
        handler: || get(handlers::account::get_account),
    },
    Route {
        path: "/divide",
        class: VulnClass::InformationDisclosure,
        handler: || get(handlers::divide::divide_handler),
    },
];

/// Find the table entry for a matched path pattern.
pub fn lookup(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

/// Compile the route table into an axum router.
pub fn build(routes: &[Route]) -> Router<AppState> {
    routes.iter().fold(Router::new(), |router, route| {
        tracing::debug!(path = route.path, class = %route.class, "Registering route");
        router.route(route.path, (route.handler)())
    })
}
