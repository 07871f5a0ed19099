//! Configuration registry seam.
//!
//! The registry is externally owned and read-only: it is supplied fully
//! formed before compilation begins and queried at most once per category
//! per compilation pass.

use crate::config::schema::{RouteGroupRecord, RouteRecord};

/// Read-only supplier of flat route and route-group records.
pub trait RouteRegistry {
    /// All route records, in declaration order.
    fn routes(&self) -> Vec<RouteRecord>;

    /// All route-group records, in declaration order.
    fn route_groups(&self) -> Vec<RouteGroupRecord>;
}

/// A registry over pre-assembled record collections.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    routes: Vec<RouteRecord>,
    groups: Vec<RouteGroupRecord>,
}

impl StaticRegistry {
    /// Create a registry from record collections, preserving their order.
    pub fn new(routes: Vec<RouteRecord>, groups: Vec<RouteGroupRecord>) -> Self {
        Self { routes, groups }
    }
}

impl RouteRegistry for StaticRegistry {
    fn routes(&self) -> Vec<RouteRecord> {
        self.routes.clone()
    }

    fn route_groups(&self) -> Vec<RouteGroupRecord> {
        self.groups.clone()
    }
}
