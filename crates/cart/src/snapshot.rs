//! Snapshot persistence for cart state.
//!
//! The cart is mirrored to a local key-value store as one JSON blob per
//! key, the way a browser session mirrors to `localStorage`. The store is
//! synchronous: the cart has exactly one logical owner, so there is no
//! concurrent-writer scenario to guard against.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a snapshot store.
///
/// Callers in this crate treat these as non-fatal: a failed read hydrates
/// an empty cart and a failed write is logged while the in-memory state
/// stays authoritative.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage failed.
    #[error("storage error: {0}")]
    Io(#[from] io::Error),
    /// The snapshot key is not usable as a storage location.
    #[error("invalid snapshot key: {0}")]
    InvalidKey(String),
}

/// Synchronous key-value storage for JSON snapshots.
pub trait SnapshotStore {
    /// Read the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Write `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Delete the blob under `key`; absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    fn remove(&mut self, key: &str) -> Result<(), SnapshotError>;
}

/// In-memory store for tests and sessions without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SnapshotError> {
        // Keys become file names; reject anything that would escape the dir.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(SnapshotError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
