//! Timetable persistence boundary.
//!
//! The engine treats storage as a collaborator behind [`TimetableStore`]:
//! load a class's timetable, replace it wholesale, list what is stored.
//! Atomicity of the replace is the store's concern, not the engine's.
//!
//! Two backends are provided: an in-memory map (tests, embedding into a
//! larger service) and a single-file JSON document store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::{ClassKey, Timetable};

/// Store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Malformed stored document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator for timetables.
///
/// One timetable exists per class key; `replace` discards any previous
/// grid for that key.
pub trait TimetableStore {
    /// Loads the timetable for a class, if one is stored.
    fn load(&self, key: &ClassKey) -> StoreResult<Option<Timetable>>;

    /// Stores a timetable, replacing any previous one for its class.
    fn replace(&self, timetable: &Timetable) -> StoreResult<()>;

    /// Lists all stored timetables.
    fn list(&self) -> StoreResult<Vec<Timetable>>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<ClassKey, Timetable>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimetableStore for MemoryStore {
    fn load(&self, key: &ClassKey) -> StoreResult<Option<Timetable>> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn replace(&self, timetable: &Timetable) -> StoreResult<()> {
        self.inner
            .write()
            .insert(timetable.key(), timetable.clone());
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Timetable>> {
        Ok(self.inner.read().values().cloned().collect())
    }
}

/// Single-file JSON store: one document holding every timetable.
///
/// A missing file reads as empty. Writes rewrite the whole document;
/// callers needing durability against partial writes should point this
/// at a filesystem that renames atomically or wrap it accordingly.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<Vec<Timetable>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, timetables: &[Timetable]) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(timetables)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl TimetableStore for JsonFileStore {
    fn load(&self, key: &ClassKey) -> StoreResult<Option<Timetable>> {
        Ok(self.read_all()?.into_iter().find(|t| &t.key() == key))
    }

    fn replace(&self, timetable: &Timetable) -> StoreResult<()> {
        let mut all = self.read_all()?;
        all.retain(|t| t.key() != timetable.key());
        all.push(timetable.clone());
        self.write_all(&all)
    }

    fn list(&self) -> StoreResult<Vec<Timetable>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    fn timetable(batch: &str, section: &str, periods: u32) -> Timetable {
        let mut tt = Timetable::new(batch, section);
        for period in 1..=periods {
            tt.add_slot(Slot {
                day: 1,
                period,
                course: "c1".into(),
                teacher: "t1".into(),
                room: "r1".into(),
            });
        }
        tt
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let key = ClassKey::new("5", "B");
        assert!(store.load(&key).unwrap().is_none());

        store.replace(&timetable("5", "B", 2)).unwrap();
        assert_eq!(store.load(&key).unwrap().unwrap().slot_count(), 2);
    }

    #[test]
    fn test_memory_store_replace_discards_old_grid() {
        let store = MemoryStore::new();
        store.replace(&timetable("5", "B", 4)).unwrap();
        store.replace(&timetable("5", "B", 1)).unwrap();

        let loaded = store.load(&ClassKey::new("5", "B")).unwrap().unwrap();
        assert_eq!(loaded.slot_count(), 1);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("timetables.json"));

        assert!(store.list().unwrap().is_empty());
        store.replace(&timetable("5", "B", 3)).unwrap();
        store.replace(&timetable("6", "A", 1)).unwrap();
        store.replace(&timetable("5", "B", 2)).unwrap();

        let loaded = store.load(&ClassKey::new("5", "B")).unwrap().unwrap();
        assert_eq!(loaded.slot_count(), 2);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_json_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetables.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.list().unwrap_err(),
            StoreError::Serialization(_)
        ));
    }
}
