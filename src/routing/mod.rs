//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route compilation (at startup):
//!     RouteRecord[] + RouteGroupRecord[]   (flat, parent-referencing)
//!     → builder.rs (bottom-up peeling, weight ordering, cycle cap)
//!     → RouteGroup[] (ordered, immutable forest)
//!
//! Request dispatch (downstream, out of scope):
//!     match ports/hosts → walk home_route.children for deepest path match
//! ```
//!
//! # Design Decisions
//! - Forest compiled once, immutable at runtime
//! - Deterministic: ordering is (weight ascending, declaration order)
//! - Cycles fail compilation instead of looping forever

pub mod builder;
pub mod route;

pub use builder::build;
pub use route::{Route, RouteGroup};
