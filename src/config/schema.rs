//! Configuration record schemas.
//!
//! Flat input records as they appear in configuration. All optional fields
//! carry their documented defaults in the schema itself, so no read site
//! resolves a default ad hoc.

use serde::{Deserialize, Serialize};

/// One flat route declaration.
///
/// Routes reference their enclosing route by `parent` key; declaration order
/// carries no parent/child meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRecord {
    /// Unique identifier within one compilation.
    pub key: String,

    /// Path segment matched against the request path.
    pub path: String,

    /// Opaque handle of the service invoked on a match.
    pub service: String,

    /// HTTP methods this route accepts.
    pub methods: Vec<String>,

    /// Opaque handle of the output handler.
    #[serde(default)]
    pub output_service: Option<String>,

    /// Opaque handle of the error registry.
    #[serde(default)]
    pub error_registry_service: Option<String>,

    /// Authorization handles, evaluated in order.
    #[serde(default)]
    pub authorizations: Vec<String>,

    /// Key of the enclosing route, if nested.
    #[serde(default)]
    pub parent: Option<String>,

    /// Sibling ordering weight; lower sorts first (default: 1000).
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// One flat route-group declaration, binding ports and hosts to a root route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteGroupRecord {
    /// Unique identifier within one compilation.
    pub key: String,

    /// Ports this group listens on.
    pub ports: Vec<u16>,

    /// Hostnames this group serves.
    pub hosts: Vec<String>,

    /// Opaque handle of the group-level error registry.
    #[serde(default)]
    pub error_registry_service: Option<String>,

    /// Group-wide authorization handles, evaluated in order.
    #[serde(default)]
    pub authorizations: Vec<String>,

    /// Key of the route tree this group serves.
    pub route: String,

    /// Group ordering weight; lower sorts first (default: 1000).
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1000
}
