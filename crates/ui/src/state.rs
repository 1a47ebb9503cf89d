//! State types for the UI

use std::path::PathBuf;

use history::HistoryStore;

/// Fallback target shown on a fresh install with no history.
pub const DEFAULT_TARGET: &str = "Valorant.exe";

/// Name of the history file, resolved against the working directory.
pub const HISTORY_FILE: &str = "game_history.json";

/// Paths the launcher UI works with, handed in from `main` instead of
/// read from module globals.
#[derive(Clone, Debug)]
pub struct SpooferConfig {
    /// Where the history JSON lives.
    pub history_path: PathBuf,
    /// Where spoofed copies are deployed.
    pub spoof_dir: PathBuf,
}

impl Default for SpooferConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(HISTORY_FILE),
            spoof_dir: std::env::temp_dir(),
        }
    }
}

/// Initial value of the target input: the most recently launched name,
/// or the stock fallback on a fresh install.
pub fn default_target(history: &HistoryStore) -> String {
    history
        .most_recent()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_TARGET.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fresh_install_defaults_to_the_stock_target() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::load(dir.path().join(HISTORY_FILE));
        assert_eq!(default_target(&store), "Valorant.exe");
    }

    #[test]
    fn default_target_is_the_most_recent_history_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        let mut store = HistoryStore::load(&path);
        store.record("B.exe");
        store.record("A.exe");

        let reloaded = HistoryStore::load(&path);
        assert_eq!(default_target(&reloaded), "A.exe");
    }
}
