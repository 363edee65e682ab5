//! Persisted level progress.
//!
//! Progress is a single integer key, `CurrentLevel`, behind the
//! [`KeyValueStore`] trait so hosts can plug in their own backend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SceneResult;
use crate::level::LevelId;

/// Key under which the current level is stored.
pub const CURRENT_LEVEL_KEY: &str = "CurrentLevel";

/// Integer key-value persistence.
pub trait KeyValueStore {
    /// Read an integer, or `None` if unset.
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Write an integer.
    fn set_int(&mut self, key: &str, value: i64) -> SceneResult<()>;

    /// Remove a key. Removing an unset key is not an error.
    fn delete(&mut self, key: &str) -> SceneResult<()>;
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, i64>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> SceneResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> SceneResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// A store backed by a pretty-printed JSON object on disk.
///
/// Every write is flushed to the file immediately. A missing file reads as
/// an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading existing values if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> SceneResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> SceneResult<()> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) -> SceneResult<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }

    fn delete(&mut self, key: &str) -> SceneResult<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// Reads and writes the `CurrentLevel` key.
#[derive(Debug, Clone)]
pub struct LevelProgress<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LevelProgress<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The recorded level, if any. Values outside the level id range read as unset.
    pub fn current_level(&self) -> Option<LevelId> {
        self.store
            .get_int(CURRENT_LEVEL_KEY)
            .and_then(|value| u32::try_from(value).ok())
            .map(LevelId)
    }

    /// Record `level` as the level to continue from.
    pub fn record(&mut self, level: LevelId) -> SceneResult<()> {
        self.store.set_int(CURRENT_LEVEL_KEY, i64::from(level.0))
    }

    /// Forget the recorded level.
    pub fn clear(&mut self) -> SceneResult<()> {
        self.store.delete(CURRENT_LEVEL_KEY)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap into the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("a"), None);
        store.set_int("a", 3).unwrap();
        assert_eq!(store.get_int("a"), Some(3));
        store.delete("a").unwrap();
        store.delete("a").unwrap();
        assert_eq!(store.get_int("a"), None);
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("progress.json")).unwrap();
        assert_eq!(store.get_int(CURRENT_LEVEL_KEY), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn json_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_int(CURRENT_LEVEL_KEY, 2).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get_int(CURRENT_LEVEL_KEY), Some(2));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"CurrentLevel\": 2"));
    }

    #[test]
    fn json_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }

    #[test]
    fn level_progress_record_and_clear() {
        let mut progress = LevelProgress::new(MemoryStore::new());
        assert_eq!(progress.current_level(), None);
        progress.record(LevelId(3)).unwrap();
        assert_eq!(progress.current_level(), Some(LevelId(3)));
        progress.clear().unwrap();
        assert_eq!(progress.current_level(), None);
    }

    #[test]
    fn negative_level_reads_as_unset() {
        let mut store = MemoryStore::new();
        store.set_int(CURRENT_LEVEL_KEY, -1).unwrap();
        assert_eq!(LevelProgress::new(store).current_level(), None);
    }
}
