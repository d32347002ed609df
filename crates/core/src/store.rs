//! Persistence boundary - load/save of the single game record
//!
//! There is one well-known record per store; every save overwrites it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::snapshot::GameRecord;

/// Durable home of the game record
pub trait GameStore {
    /// Overwrite the stored record
    fn save(&mut self, record: &GameRecord) -> Result<(), StoreError>;

    /// Read the stored record; `Ok(None)` if nothing has been saved yet
    fn load(&self) -> Result<Option<GameRecord>, StoreError>;
}

/// Pretty-printed JSON document at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for JsonFileStore {
    /// Writes a sibling temp file and renames it over the record, so a failed
    /// write never leaves a truncated save behind.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    fn save(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("game saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<GameRecord>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no saved game");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_str(&json)?;
        debug!("game loaded");
        Ok(Some(record))
    }
}

/// In-memory store, with optional failure injection.
///
/// Clones share the same record, like two handles on one save file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryRecord>>,
    fail_saves: bool,
}

#[derive(Debug, Default)]
struct MemoryRecord {
    record: Option<GameRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record
    pub fn with_record(record: GameRecord) -> Self {
        let store = Self::default();
        store.lock().record = Some(record);
        store
    }

    /// Store whose every save fails with an I/O error
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn record(&self) -> Option<GameRecord> {
        self.lock().record.clone()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> MutexGuard<'_, MemoryRecord> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(io::Error::other("store is read-only").into());
        }
        let mut inner = self.lock();
        inner.record = Some(record.clone());
        inner.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<GameRecord>, StoreError> {
        Ok(self.record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("game.json"));
        assert_eq!(store.load().unwrap(), None);

        let record = GameRecord::from(&GameState::new(4).unwrap());
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record.clone()));

        // Saving again overwrites the single record
        let mut second = record;
        second.current_player = 3;
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
        assert!(!dir.path().join("game.json.tmp").exists());
    }

    #[test]
    fn test_json_file_store_reports_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_json_file_store_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("missing").join("game.json"));
        let record = GameRecord::from(&GameState::new(2).unwrap());
        assert!(matches!(store.save(&record), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_memory_store_clones_share_the_record() {
        let mut store = MemoryStore::new();
        let handle = store.clone();
        let record = GameRecord::from(&GameState::new(2).unwrap());
        store.save(&record).unwrap();
        assert_eq!(handle.load().unwrap(), Some(record));
        assert_eq!(handle.saves(), 1);
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let mut store = MemoryStore::failing();
        let record = GameRecord::from(&GameState::new(2).unwrap());
        assert!(matches!(
            store.save(&record),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::Other
        ));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.record(), None);
    }
}
