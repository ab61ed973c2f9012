//! Key-value storage for saved games
//!
//! The game state is saved under a single fixed key. `FileStore` keeps one
//! JSON file per key in a data directory; `MemoryStore` keeps everything in
//! memory and is meant for tests.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key the current game is stored under
pub const STATE_KEY: &str = "gameState";

/// Port for reading and writing saved state
pub trait StateStore {
    /// Read the value for `key`, `None` if nothing was stored
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory, e.g. `~/.local/share/lesble` on Linux
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("lesble"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(format!("read {}", path.display()), e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::io(format!("create {}", self.dir.display()), e))?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| Error::io(format!("write {}", path.display()), e))
    }
}

/// In-memory store; clones share the same storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    storage: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.borrow().is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(STATE_KEY).unwrap(), None);

        store.set(STATE_KEY, "{}").unwrap();
        assert_eq!(store.get(STATE_KEY).unwrap().as_deref(), Some("{}"));

        store.set(STATE_KEY, "[]").unwrap();
        assert_eq!(store.get(STATE_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_clones_share_storage() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get(STATE_KEY).unwrap(), None);

        store.set(STATE_KEY, r#"{"day":1}"#).unwrap();
        assert!(dir.path().join("nested").join("gameState.json").exists());
        assert_eq!(
            store.get(STATE_KEY).unwrap().as_deref(),
            Some(r#"{"day":1}"#)
        );
    }
}
