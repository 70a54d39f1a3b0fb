//! State store implementations.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::state::{StateError, StateResult, ViewState};

/// Backing storage for per-list view state.
///
/// Entries are keyed by list name. `load` distinguishes "no entry for this
/// name" (`Ok(None)`) from a store that cannot be read at all (`Err`); the
/// caller treats both as "use the defaults" but only logs the latter.
pub trait StateStore {
    /// Loads the state saved under `name`, if any.
    fn load(&self, name: &str) -> StateResult<Option<ViewState>>;

    /// Saves `state` under `name`, replacing any previous entry.
    fn save(&self, name: &str, state: &ViewState) -> StateResult<()>;
}

/// An in-memory state store.
///
/// Nothing survives the process; useful for tests and for applications that
/// opt out of persistence.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: RwLock<HashMap<String, ViewState>>,
}

impl MemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, name: &str) -> StateResult<Option<ViewState>> {
        Ok(self.entries.read().get(name).cloned())
    }

    fn save(&self, name: &str, state: &ViewState) -> StateResult<()> {
        self.entries.write().insert(name.to_string(), state.clone());
        Ok(())
    }
}

/// A state store backed by a single JSON file.
///
/// The file holds a name-to-state map covering every list of the
/// application. A missing file is an empty store, not an error; a file that
/// exists but does not parse is reported as invalid data and left untouched
/// until the next save replaces it. Saves rewrite the whole file atomically
/// through a sibling temporary file and rename.
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Creates a store backed by the given file. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StateResult<HashMap<String, ViewState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(StateError::io(&self.path, err)),
        };

        serde_json::from_str(&content).map_err(|err| {
            StateError::invalid_data(&self.path, io::Error::new(io::ErrorKind::InvalidData, err))
        })
    }

    fn write_all(&self, entries: &HashMap<String, ViewState>) -> StateResult<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|err| {
            StateError::invalid_data(&self.path, io::Error::new(io::ErrorKind::InvalidData, err))
        })?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json.as_bytes()).map_err(|err| StateError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            fs::remove_file(&tmp).ok();
            StateError::io(&self.path, err)
        })
    }
}

impl StateStore for JsonStateStore {
    fn load(&self, name: &str) -> StateResult<Option<ViewState>> {
        let entries = self.read_all()?;
        Ok(entries.get(name).cloned())
    }

    fn save(&self, name: &str, state: &ViewState) -> StateResult<()> {
        // Corrupt files get replaced wholesale rather than blocking saves.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(name.to_string(), state.clone());
        self.write_all(&entries)?;

        tracing::debug!(
            target: "rowview::persist",
            list = name,
            path = %self.path.display(),
            "saved view state"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortOrder;
    use crate::persist::StateErrorKind;

    fn sample_state() -> ViewState {
        ViewState {
            column_order: vec![1, 0],
            column_widths: vec![80.0, 120.0],
            sort_column: 1,
            sort_order: SortOrder::Descending,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStateStore::new();
        assert_eq!(store.load("drives").unwrap(), None);

        store.save("drives", &sample_state()).unwrap();
        assert_eq!(store.load("drives").unwrap(), Some(sample_state()));
        assert_eq!(store.load("extensions").unwrap(), None);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(dir.path().join("state.json"));
        assert_eq!(store.load("drives").unwrap(), None);
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(dir.path().join("state.json"));

        store.save("drives", &sample_state()).unwrap();

        // A fresh store over the same file sees the entry.
        let reopened = JsonStateStore::new(store.path());
        assert_eq!(reopened.load("drives").unwrap(), Some(sample_state()));
        assert_eq!(reopened.load("extensions").unwrap(), None);
    }

    #[test]
    fn test_json_store_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(dir.path().join("state.json"));

        let mut other = sample_state();
        other.sort_column = 0;
        store.save("drives", &sample_state()).unwrap();
        store.save("extensions", &other).unwrap();

        assert_eq!(store.load("drives").unwrap(), Some(sample_state()));
        assert_eq!(store.load("extensions").unwrap(), Some(other));
    }

    #[test]
    fn test_json_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonStateStore::new(&path);
        let err = store.load("drives").unwrap_err();
        assert_eq!(err.kind(), StateErrorKind::InvalidData);

        // A save replaces the corrupt file and recovers the store.
        store.save("drives", &sample_state()).unwrap();
        assert_eq!(store.load("drives").unwrap(), Some(sample_state()));
    }

    #[test]
    fn test_json_store_no_stray_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStateStore::new(dir.path().join("state.json"));
        store.save("drives", &sample_state()).unwrap();

        let tmp = store.path().with_extension("tmp");
        assert!(!tmp.exists());
    }
}
