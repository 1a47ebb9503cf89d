//! Persisted history of spoofed target names
//! A JSON-backed, most-recent-first list capped at five entries

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum number of names kept in the history.
pub const HISTORY_LIMIT: usize = 5;

/// Errors raised while reading or writing the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot access history file: {0}")]
    Io(#[from] io::Error),
    #[error("history file is not a JSON list of strings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Previously used target names, most recent first.
///
/// Every mutation is persisted synchronously to a JSON string array.
/// Persistence failures are logged and swallowed: losing history must
/// never block a launch.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Load the history stored at `path`.
    ///
    /// A missing file is the normal first-run case and yields an empty
    /// list. An unreadable or malformed file also degrades to empty,
    /// but that gets logged since it means the file was damaged.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(HistoryError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no history file at {} yet", path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("ignoring damaged history file {}: {}", path.display(), e);
                Vec::new()
            }
        };
        Self { path, entries }
    }

    /// Names in most-recently-used order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The name used by the most recent launch, if any.
    pub fn most_recent(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move-or-insert `name` at the front and persist.
    ///
    /// Recording a name that is already present moves it to the front
    /// instead of duplicating it. The list never grows past
    /// [`HISTORY_LIMIT`].
    pub fn record(&mut self, name: &str) {
        self.entries.retain(|entry| entry != name);
        self.entries.insert(0, name.to_string());
        self.entries.truncate(HISTORY_LIMIT);

        if let Err(e) = self.save() {
            tracing::warn!("failed to persist history to {}: {}", self.path.display(), e);
        }
    }

    fn save(&self) -> Result<(), HistoryError> {
        fs::write(&self.path, serde_json::to_string(&self.entries)?)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<Vec<String>, HistoryError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::load(dir.path().join("game_history.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert_eq!(store.most_recent(), None);
    }

    #[test]
    fn empty_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game_history.json");
        fs::write(&path, "").unwrap();
        assert!(HistoryStore::load(&path).is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game_history.json");
        fs::write(&path, "{not json").unwrap();
        assert!(HistoryStore::load(&path).is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game_history.json");
        // valid JSON, but an object instead of a string list
        fs::write(&path, r#"{"games": ["A.exe"]}"#).unwrap();
        assert!(HistoryStore::load(&path).is_empty());
    }

    #[test]
    fn record_orders_most_recent_first() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.record("A.exe");
        store.record("B.exe");
        store.record("C.exe");
        assert_eq!(store.entries(), ["C.exe", "B.exe", "A.exe"]);
        assert_eq!(store.most_recent(), Some("C.exe"));
    }

    #[test]
    fn record_moves_duplicates_to_front_without_growing() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.record("A.exe");
        store.record("B.exe");
        store.record("A.exe");
        assert_eq!(store.entries(), ["A.exe", "B.exe"]);
    }

    #[test]
    fn recording_the_front_entry_again_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.record("A.exe");
        store.record("B.exe");
        let before: Vec<String> = store.entries().to_vec();
        store.record("B.exe");
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn record_caps_at_five_entries() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            store.record(name);
        }
        assert_eq!(store.entries().len(), HISTORY_LIMIT);
        assert_eq!(store.entries(), ["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn load_round_trips_recorded_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game_history.json");
        let mut store = HistoryStore::load(&path);
        store.record("Valorant.exe");
        store.record("Dota2.exe");

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.entries(), ["Dota2.exe", "Valorant.exe"]);
    }

    #[test]
    fn save_failure_keeps_in_memory_entries() {
        let dir = TempDir::new().unwrap();
        // parent directory does not exist, so every save fails
        let mut store = HistoryStore::load(dir.path().join("missing").join("h.json"));
        store.record("A.exe");
        assert_eq!(store.entries(), ["A.exe"]);
    }
}
