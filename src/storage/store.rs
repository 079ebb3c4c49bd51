//! Key-value storage port
//!
//! The budget data lives under a handful of string keys, each holding a
//! string value (numbers as decimal text, lists as JSON). `FileStore` keeps
//! the pairs in a single JSON object on disk; `MemoryStore` keeps them in
//! memory only.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_json, write_json_atomic};

/// String key-value persistence
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> BudgetResult<()>;

    /// Remove `key`; returns whether it was present
    fn remove(&self, key: &str) -> BudgetResult<bool>;

    /// Remove every key
    fn clear(&self) -> BudgetResult<()>;

    /// All keys, sorted
    fn keys(&self) -> BudgetResult<Vec<String>>;
}

type Entries = BTreeMap<String, String>;

fn read_lock(entries: &RwLock<Entries>) -> BudgetResult<RwLockReadGuard<'_, Entries>> {
    entries
        .read()
        .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))
}

fn write_lock(entries: &RwLock<Entries>) -> BudgetResult<RwLockWriteGuard<'_, Entries>> {
    entries
        .write()
        .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(read_lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        write_lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BudgetResult<bool> {
        Ok(write_lock(&self.entries)?.remove(key).is_some())
    }

    fn clear(&self) -> BudgetResult<()> {
        write_lock(&self.entries)?.clear();
        Ok(())
    }

    fn keys(&self) -> BudgetResult<Vec<String>> {
        Ok(read_lock(&self.entries)?.keys().cloned().collect())
    }
}

/// Store persisted as a JSON object; every change is written immediately
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file doesn't exist
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let path = path.into();
        let entries: Entries = read_json(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Apply `change` to a copy of the entries and keep the copy only once
    /// it has been written. `change` returns false when there is nothing to
    /// write.
    fn commit<F>(&self, change: F) -> BudgetResult<bool>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let mut entries = write_lock(&self.entries)?;
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(false);
        }
        write_json_atomic(&self.path, &next)?;
        *entries = next;
        Ok(true)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(read_lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
        self.commit(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> BudgetResult<bool> {
        self.commit(|entries| entries.remove(key).is_some())
    }

    fn clear(&self) -> BudgetResult<()> {
        self.commit(|entries| {
            entries.clear();
            true
        })?;
        Ok(())
    }

    fn keys(&self) -> BudgetResult<Vec<String>> {
        Ok(read_lock(&self.entries)?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("income").unwrap(), None);

        store.set("income", "3000").unwrap();
        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("income").unwrap().as_deref(), Some("3000"));
        assert_eq!(store.keys().unwrap(), vec!["expenses", "income"]);

        store.set("income", "3500").unwrap();
        assert_eq!(store.get("income").unwrap().as_deref(), Some("3500"));

        assert!(store.remove("expenses").unwrap());
        assert!(!store.remove("expenses").unwrap());

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("store.json")).unwrap();
        exercise(&store);
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let store = FileStore::open(data_dir.join("store.json")).unwrap();
        store.set("income", "3000").unwrap();

        // a plain file where the data directory should be
        std::fs::remove_dir_all(&data_dir).unwrap();
        std::fs::write(&data_dir, "not a directory").unwrap();

        assert!(store.set("income", "9999").is_err());
        assert!(store.set("expenses", "[]").is_err());
        assert!(store.remove("income").is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.get("income").unwrap().as_deref(), Some("3000"));
        assert_eq!(store.keys().unwrap(), vec!["income"]);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("income", "4200.5").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("income").unwrap().as_deref(), Some("4200.5"));
    }

    #[test]
    fn test_file_store_clear_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set("income", "1").unwrap();
        store.clear().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.keys().unwrap().is_empty());
    }
}
