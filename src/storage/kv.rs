use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::AppResult;

/// Key-value persistence port for client-scoped state
///
/// Mirrors the browser localStorage contract the original client used:
/// string keys, JSON values, no schema. Injected into the profile store so
/// consumers never touch a hidden global.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StoragePort: Send + Sync {
    /// Read the value stored under a key, if any
    async fn get(&self, key: &str) -> AppResult<Option<Value>>;

    /// Durably store a value under a key, overwriting any prior value
    async fn set(&self, key: &str, value: Value) -> AppResult<()>;
}

/// File-backed store: one JSON object holding all keys
///
/// Reads and writes the whole file per operation; fine at this scale, and
/// the lock keeps concurrent writers from interleaving.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> AppResult<HashMap<String, Value>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait::async_trait]
impl StoragePort for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        std::fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StoragePort for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> AppResult<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("pantry-kv-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_json_file_store_round_trips() {
        let path = temp_path();
        let store = JsonFileStore::new(&path);

        assert_eq!(store.get("recipe:favorites").await.unwrap(), None);

        store
            .set("recipe:favorites", json!(["r1", "r2"]))
            .await
            .unwrap();
        store
            .set("recipe:ratings", json!({"r1": 5}))
            .await
            .unwrap();

        assert_eq!(
            store.get("recipe:favorites").await.unwrap(),
            Some(json!(["r1", "r2"]))
        );

        // A fresh store over the same file sees the persisted values
        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("recipe:ratings").await.unwrap(),
            Some(json!({"r1": 5}))
        );

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", json!(1)).await.unwrap();
        store.set("k", json!(2)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(2)));
    }
}
