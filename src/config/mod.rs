//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, all defects reported)
//!     → StaticRegistry (validated records, declaration order preserved)
//!
//! Programmatic callers skip the loader and assemble a StaticRegistry
//! (or any RouteRegistry implementation) directly.
//! ```
//!
//! # Design Decisions
//! - Records are immutable once loaded
//! - Every optional field has its default baked into the schema
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod registry;
pub mod schema;
pub mod validation;

pub use loader::load_registry;
pub use registry::{RouteRegistry, StaticRegistry};
pub use schema::{RouteGroupRecord, RouteRecord};
