//! Key-value persistence port used by the tracker, history and theme.
//!
//! The tracker never touches the filesystem directly; it talks to a
//! [`KeyValueStore`] which maps string keys to string values. Two
//! implementations are provided:
//!
//! - [`FileStore`]: one file per key inside the application data directory
//! - [`MemoryStore`]: an in-memory map, used by tests
//!
//! Reads and writes are synchronous and unconditional overwrites. There is no
//! locking: two processes writing the same key race with last-write-wins.
//!
//! ```rust,no_run
//! use wtime::libs::storage::{FileStore, KeyValueStore};
//!
//! let mut store = FileStore::open_default()?;
//! store.set("theme", "dark")?;
//! assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::config::Config;
use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the current session snapshot is stored.
pub const SESSION_KEY: &str = "session.json";
/// Key under which the per-day history map is stored.
pub const HISTORY_KEY: &str = "history.json";
/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// String-keyed storage with get/set/remove semantics.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces whatever is stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores every key as a file named after the key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store at the configured `storage.path`, falling back to the
    /// platform data directory.
    pub fn open_default() -> Result<Self> {
        let config = Config::read()?;
        let dir = match config.storage.and_then(|s| s.path) {
            Some(path) => path,
            None => DataStorage::new().base_path().to_path_buf(),
        };
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path_for(key).display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).with_context(|| format!("creating {}", self.dir.display()))?;
        }
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("writing {}", path.display()))?;
        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path_for(key).display())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
