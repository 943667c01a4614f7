//! Key-value session storage
//!
//! The client persists exactly two keys: [`SESSION_KEY`] holding the logged-in
//! roll number and [`ADMIN_KEY`] holding the admin flag. Values are plain
//! strings; [`StorageExt`] layers JSON on top for callers that need it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ClientResult;

/// Roll number of the logged-in student
pub const SESSION_KEY: &str = "savedRoll";

/// `"true"` while an admin session is open
pub const ADMIN_KEY: &str = "adminUser";

pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove_item(&self, key: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// JSON helpers over any [`Storage`]
pub trait StorageExt: Storage {
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> ClientResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_item(key, &json)
    }

    /// Unparseable values read as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value is not valid JSON");
                None
            }
        }
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-local storage, gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        lock(&self.items).remove(key);
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        lock(&self.items).clear();
        Ok(())
    }
}

/// Storage persisted as one JSON object file
///
/// The whole map is rewritten on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the store, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> ClientResult<Self> {
        let path = path.into();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut items = lock(&self.items);
        items.insert(key.to_string(), value.to_string());
        self.persist(&items)
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        let mut items = lock(&self.items);
        if items.remove(key).is_some() {
            self.persist(&items)?;
        }
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut items = lock(&self.items);
        items.clear();
        self.persist(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item(SESSION_KEY).is_none());

        storage.set_item(SESSION_KEY, "101").unwrap();
        assert_eq!(storage.get_item(SESSION_KEY).as_deref(), Some("101"));

        storage.remove_item(SESSION_KEY).unwrap();
        assert!(storage.get_item(SESSION_KEY).is_none());
    }

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::new();
        storage.set_json("recent", &vec![1, 2, 3]).unwrap();
        assert_eq!(storage.get_json::<Vec<i32>>("recent"), Some(vec![1, 2, 3]));

        storage.set_item("broken", "{not json").unwrap();
        assert_eq!(storage.get_json::<Vec<i32>>("broken"), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("session.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item(SESSION_KEY, "CS101").unwrap();
        storage.set_item(ADMIN_KEY, "true").unwrap();
        assert!(path.exists());

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item(SESSION_KEY).as_deref(), Some("CS101"));

        reopened.clear().unwrap();
        let cleared = FileStorage::open(&path).unwrap();
        assert!(cleared.get_item(ADMIN_KEY).is_none());
    }
}
