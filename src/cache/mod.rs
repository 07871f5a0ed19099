//! Snapshot cache subsystem.
//!
//! # Data Flow
//! ```text
//! Compiler
//!     → exists("routes")   (cheap probe, no deserialization)
//!     → fetch("routes")    (snapshot out of the store)
//!     → store("routes", …) (snapshot into the store)
//!
//! Backends:
//!     memory.rs — process-local, concurrent map
//!     file.rs   — JSON files on disk, shared across processes
//! ```
//!
//! # Design Decisions
//! - Narrow capability trait so any key-value backend can satisfy it
//! - Snapshots are plain JSON values; the cache never interprets them
//! - Append/overwrite only: the compiler never deletes entries it did not write
//! - A racing cold start may store twice; compilation is deterministic, so the
//!   duplicate write is redundant work, not corruption

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileCache;
pub use memory::MemoryCache;

/// A fully self-contained, serializable representation of a compiled forest.
pub type Snapshot = serde_json::Value;

/// Errors produced by a cache backend.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store could not be read or written.
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored entry is not valid JSON.
    #[error("cache entry is not decodable: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Key/value store abstraction for compiled forest snapshots.
pub trait SnapshotCache: Send + Sync {
    /// Returns true if an entry exists under `key`.
    fn exists(&self, key: &str) -> bool;

    /// Fetches the snapshot stored under `key`, if any.
    fn fetch(&self, key: &str) -> Result<Option<Snapshot>, CacheError>;

    /// Stores `snapshot` under `key`, overwriting any previous entry.
    fn store(&self, key: &str, snapshot: Snapshot) -> Result<(), CacheError>;
}
