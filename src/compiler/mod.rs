//! Compiler subsystem.
//!
//! # Data Flow
//! ```text
//! compile(registry):
//!     cache.exists("routes")?
//!         yes → cache.fetch → snapshot.rs restore → RouteGroup[]
//!         no  → registry records → routing::builder
//!               → snapshot.rs serialize → cache.store("routes", …)
//!               → RouteGroup[]
//! ```
//!
//! # Design Decisions
//! - The cache is a pure side-effecting optimization; correctness never
//!   depends on it
//! - Builder failures abort compilation before anything is stored

pub mod route_compiler;
pub mod snapshot;

pub use route_compiler::{RouteCompiler, ROUTES_CACHE_KEY};
pub use snapshot::{restore, serialize};
