use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use caliber_core::error::CaliberError;
use rusqlite::Connection;

use crate::origin::Origin;

/// A persistent string key-value store scoped to one origin.
///
/// Values are replaced wholesale on write; removing an absent key is not an error.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CaliberError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), CaliberError>;

    fn remove_item(&self, key: &str) -> Result<(), CaliberError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, CaliberError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CaliberError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CaliberError> {
        (**self).remove_item(key)
    }
}

/// SQLite-backed store; one instance is bound to a single origin.
pub struct SqliteStore {
    conn: Connection,
    origin: Origin,
}

impl SqliteStore {
    pub fn new(conn: Connection, origin: Origin) -> Self {
        Self { conn, origin }
    }

    /// Open the database at `path` (running migrations) and bind it to `origin`.
    pub fn open(path: &Path, origin: Origin) -> Result<Self, CaliberError> {
        let conn = crate::open_db(path).map_err(|e| CaliberError::Database(e.to_string()))?;
        Ok(Self::new(conn, origin))
    }

    pub fn open_in_memory(origin: Origin) -> Result<Self, CaliberError> {
        let conn = crate::open_memory_db().map_err(|e| CaliberError::Database(e.to_string()))?;
        Ok(Self::new(conn, origin))
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn keys(&self) -> Result<Vec<String>, CaliberError> {
        crate::ops::list_keys(&self.conn, self.origin.as_str())
            .map_err(|e| CaliberError::Database(e.to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CaliberError> {
        crate::ops::get_item(&self.conn, self.origin.as_str(), key)
            .map_err(|e| CaliberError::Database(e.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CaliberError> {
        crate::ops::set_item(&self.conn, self.origin.as_str(), key, value)
            .map_err(|e| CaliberError::Database(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), CaliberError> {
        crate::ops::remove_item(&self.conn, self.origin.as_str(), key)
            .map_err(|e| CaliberError::Database(e.to_string()))
    }
}

/// In-memory store for tests and throwaway sessions.
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CaliberError> {
        self.items
            .lock()
            .map_err(|_| CaliberError::Storage("memory store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CaliberError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CaliberError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CaliberError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localhost() -> Origin {
        Origin::parse("http://localhost").unwrap()
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("reviews").unwrap(), None);
        store.set_item("reviews", "[]").unwrap();
        assert_eq!(store.get_item("reviews").unwrap(), Some("[]".to_string()));
        store.remove_item("reviews").unwrap();
        assert_eq!(store.get_item("reviews").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove_nonexistent() {
        let store = MemoryStore::new();
        store.remove_item("no-such-key").unwrap();
    }

    #[test]
    fn test_sqlite_store_crud() {
        let store = SqliteStore::open_in_memory(localhost()).unwrap();
        assert_eq!(store.origin().as_str(), "http://localhost");
        store.set_item("reviews", "[]").unwrap();
        store.set_item("reviews", "[{}]").unwrap();
        assert_eq!(store.get_item("reviews").unwrap(), Some("[{}]".to_string()));
        assert_eq!(store.keys().unwrap(), vec!["reviews"]);
        store.remove_item("reviews").unwrap();
        assert_eq!(store.get_item("reviews").unwrap(), None);
    }

    #[test]
    fn test_sqlite_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");

        {
            let store = SqliteStore::open(&path, localhost()).unwrap();
            store.set_item("reviews", "[1,2]").unwrap();
        }

        let reopened = SqliteStore::open(&path, localhost()).unwrap();
        assert_eq!(reopened.get_item("reviews").unwrap(), Some("[1,2]".to_string()));

        let other = SqliteStore::open(&path, Origin::parse("https://other.dev").unwrap()).unwrap();
        assert_eq!(other.get_item("reviews").unwrap(), None);
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let borrowed: &MemoryStore = &store;
        borrowed.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
    }
}
