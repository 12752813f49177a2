//! Durable local key-value storage.
//!
//! The stand-in for the host environment's persistent local storage: a
//! directory holding one JSON file per key. Values are read and written
//! whole; an absent key reads as `None`, never as an error. Callers go
//! through [`crate::store::DataStore`] and [`crate::session::Session`]
//! rather than touching keys directly.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Key under which the document store is persisted.
pub const DATA_KEY: &str = "animemoments_data";
/// Key under which the current session identity is persisted.
pub const SESSION_KEY: &str = "animemoments_auth";

/// Handle to a directory of persisted keys.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Opens the storage directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`, or `None` when the key is absent.
    pub fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Writes `value` under `key`, replacing any prior value unconditionally.
    pub fn write(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.key_path(key), value)
    }

    /// Removes `key`. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
