//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};

use route_forest::{RouteGroupRecord, RouteRecord, RouteRegistry, StaticRegistry};

pub fn route(key: &str, path: &str, parent: Option<&str>, weight: u32) -> RouteRecord {
    RouteRecord {
        key: key.to_string(),
        path: path.to_string(),
        service: format!("services.{key}"),
        methods: vec!["GET".to_string()],
        output_service: None,
        error_registry_service: None,
        authorizations: Vec::new(),
        parent: parent.map(str::to_string),
        weight,
    }
}

pub fn group(key: &str, target: &str, ports: Vec<u16>, hosts: Vec<&str>) -> RouteGroupRecord {
    RouteGroupRecord {
        key: key.to_string(),
        ports,
        hosts: hosts.into_iter().map(str::to_string).collect(),
        error_registry_service: None,
        authorizations: Vec::new(),
        route: target.to_string(),
        weight: 1000,
    }
}

/// Registry probe that counts how often it is queried, to assert that the
/// cached compilation path never touches the registry.
#[derive(Default)]
pub struct CountingRegistry {
    inner: StaticRegistry,
    queries: AtomicU32,
}

impl CountingRegistry {
    pub fn new(routes: Vec<RouteRecord>, groups: Vec<RouteGroupRecord>) -> Self {
        Self {
            inner: StaticRegistry::new(routes, groups),
            queries: AtomicU32::new(0),
        }
    }

    pub fn query_count(&self) -> u32 {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RouteRegistry for CountingRegistry {
    fn routes(&self) -> Vec<RouteRecord> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.routes()
    }

    fn route_groups(&self) -> Vec<RouteGroupRecord> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.route_groups()
    }
}
