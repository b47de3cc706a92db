//! File-backed key/value store for durable sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::kv::{KeyValueStore, StorageError};

/// One-file-per-key store rooted in an application data directory.
///
/// Keys are internal, dot-separated names (e.g. `atelier.cart.v1`), never
/// user input, so they are used as file names directly.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    /// Create a store rooted at `{os data dir}/atelier`.
    ///
    /// If no data directory can be resolved for this execution context, the
    /// store is constructed anyway and every operation reports
    /// [`StorageError::Unavailable`].
    pub fn new() -> Self {
        let root = dirs::data_dir().map(|base| base.join("atelier"));
        if root.is_none() {
            tracing::debug!("no OS data directory; file store is unavailable");
        }
        Self { root }
    }

    /// Create a store rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn root(&self) -> Result<&Path, StorageError> {
        self.root
            .as_deref()
            .ok_or_else(|| StorageError::Unavailable("no data directory".to_string()))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        Ok(self.root()?.join(key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let root = self.root()?;
        fs::create_dir_all(root)?;
        fs::write(root.join(key), value)?;
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
