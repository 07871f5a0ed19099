//! Compiled routing entities.
//!
//! # Design Decisions
//! - Immutable after construction (built once per compilation, never mutated)
//! - Children are owned values, not shared references: a cycle is not
//!   representable in the compiled form
//! - Service identifiers stay opaque strings, resolved by the host application

/// A single routable path with an associated handler and nested child routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path segment matched against the request path.
    pub path: String,

    /// Opaque handle of the service invoked on a match.
    pub service: String,

    /// HTTP methods this route accepts.
    pub methods: Vec<String>,

    /// Opaque handle of the output handler, if any.
    pub output_service: Option<String>,

    /// Opaque handle of the error registry, if any.
    pub error_registry_service: Option<String>,

    /// Authorization handles, evaluated in order by the host.
    pub authorizations: Vec<String>,

    /// Child routes, ordered by ascending weight then declaration order.
    pub children: Vec<Route>,
}

/// A binding of network ports and hosts to one root [`Route`], plus
/// group-wide policy metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// Ports this group listens on.
    pub ports: Vec<u16>,

    /// Hostnames this group serves.
    pub hosts: Vec<String>,

    /// Opaque handle of the group-level error registry, if any.
    pub error_registry_service: Option<String>,

    /// Group-wide authorization handles, evaluated in order by the host.
    pub authorizations: Vec<String>,

    /// Root of the route tree served by this group.
    pub home_route: Route,
}
