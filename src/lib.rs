//! Route compilation and caching library.
//!
//! Turns flat, parent-referencing route and route-group records into an
//! ordered, immutable routing forest, and caches the compiled result so
//! repeated application startups skip recompilation.

pub mod cache;
pub mod compiler;
pub mod config;
pub mod error;
pub mod routing;

pub use cache::{FileCache, MemoryCache, Snapshot, SnapshotCache};
pub use compiler::RouteCompiler;
pub use config::registry::{RouteRegistry, StaticRegistry};
pub use config::schema::{RouteGroupRecord, RouteRecord};
pub use error::CompileError;
pub use routing::{Route, RouteGroup};
