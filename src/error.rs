//! Compilation error definitions.

use thiserror::Error;

use crate::cache::CacheError;
use crate::routing::builder::MAX_RESOLUTION_PASSES;

/// Errors that can occur while compiling the routing forest.
///
/// All variants are fatal: no partial forest is ever returned or cached.
/// The caller decides whether to abort startup or invalidate the cache and
/// rebuild.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The resolution loop made no full pass over the records within the
    /// iteration cap. Indicates a parent cycle or a self-referencing chain
    /// that never becomes a leaf.
    #[error(
        "routes not resolvable within {} passes (parent cycle or unresolvable chain)",
        MAX_RESOLUTION_PASSES
    )]
    CycleOrDepthExceeded,

    /// A route's `parent` key or a route-group's `route` key names no
    /// declared route.
    #[error("'{referrer}' references unknown route '{missing}'")]
    UnresolvedRouteReference {
        /// Key of the record holding the dangling reference.
        referrer: String,
        /// The key that could not be resolved.
        missing: String,
    },

    /// A cached snapshot does not conform to the expected structural shape.
    /// Never silently substituted with a default forest.
    #[error("snapshot does not match the expected shape: {0}")]
    SerializationMismatch(#[from] serde_json::Error),

    /// The cache backend failed while fetching or storing a snapshot.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}
