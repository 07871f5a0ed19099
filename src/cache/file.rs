//! File-backed snapshot cache.
//!
//! Persists each entry as a JSON file under a cache directory so separate
//! worker processes share one compiled forest across restarts.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::cache::{CacheError, Snapshot, SnapshotCache};

/// Snapshot cache storing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a cache rooted at `dir`. The directory is created lazily on the
    /// first `store`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotCache for FileCache {
    fn exists(&self, key: &str) -> bool {
        self.entry_path(key).is_file()
    }

    fn fetch(&self, key: &str) -> Result<Option<Snapshot>, CacheError> {
        let path = self.entry_path(key);
        if !path.is_file() {
            return Ok(None);
        }

        let reader = BufReader::new(File::open(path)?);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(Some(snapshot))
    }

    fn store(&self, key: &str, snapshot: Snapshot) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(key);
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(writer, &snapshot)?;
        tracing::info!("Stored snapshot '{}' at {}", key, path.display());
        Ok(())
    }
}
