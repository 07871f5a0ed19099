//! Compilation orchestrator.
//!
//! # Responsibilities
//! - Serve the compiled forest from cache when a snapshot exists
//! - Build, serialize, and cache the forest on a miss
//! - Never cache a failed build
//!
//! # Design Decisions
//! - Compilation is a pure function of the registry contents, so a cache miss
//!   followed by a hit yields equal results
//! - `exists`/`fetch`/`store` are not assumed atomic: racing cold starts do
//!   redundant work at worst

use crate::cache::SnapshotCache;
use crate::compiler::snapshot;
use crate::config::registry::RouteRegistry;
use crate::error::CompileError;
use crate::routing::builder;
use crate::routing::route::RouteGroup;

/// Cache key under which the compiled forest snapshot is stored.
pub const ROUTES_CACHE_KEY: &str = "routes";

/// Compiles route configuration to routable objects, through a snapshot cache.
#[derive(Debug, Clone)]
pub struct RouteCompiler<C> {
    cache: C,
}

impl<C: SnapshotCache> RouteCompiler<C> {
    /// Create a compiler over the given cache backend.
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Returns the compiled forest, from cache when possible.
    ///
    /// On a cache hit the registry is never queried and the forest builder
    /// never runs. On a miss the freshly built forest is serialized and
    /// stored under [`ROUTES_CACHE_KEY`] before it is returned.
    pub fn compile(&self, registry: &dyn RouteRegistry) -> Result<Vec<RouteGroup>, CompileError> {
        if self.cache.exists(ROUTES_CACHE_KEY) {
            // The entry can disappear between the probe and the fetch when a
            // shared backend is cleared externally; fall through to a build.
            if let Some(cached) = self.cache.fetch(ROUTES_CACHE_KEY)? {
                tracing::debug!("Restoring routing forest from cache");
                return snapshot::restore(cached);
            }
        }

        let groups = builder::build(registry.routes(), registry.route_groups())?;
        self.cache
            .store(ROUTES_CACHE_KEY, snapshot::serialize(&groups)?)?;
        tracing::info!("Compiled {} route group(s) and cached the snapshot", groups.len());

        Ok(groups)
    }
}
