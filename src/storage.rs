use std::{fs, path::PathBuf, str::FromStr};

use query_sandbox_theme::ThemeMode;

use crate::components::workbench::HistoryEntry;

const THEME_FILE: &str = "theme";
const HISTORY_FILE: &str = "query_history.json";

/// History keeps only the most recent entries, newest first.
pub const HISTORY_LIMIT: usize = 10;

/// File-backed persistence for the theme preference and the query history.
/// Reads happen once at startup; writes happen whenever the corresponding
/// state changes. Absent or malformed data always falls back to defaults,
/// never to an error.
#[derive(Debug, Clone)]
pub struct Storage {
  root: PathBuf,
}

impl Default for Storage {
  fn default() -> Self {
    Self { root: crate::utils::get_data_dir() }
  }
}

impl Storage {
  pub fn with_root(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// The stored theme, or light when nothing valid is stored. The value is
  /// a bare `light`/`dark` string, not JSON.
  pub fn load_theme(&self) -> ThemeMode {
    fs::read_to_string(self.root.join(THEME_FILE))
      .ok()
      .and_then(|s| ThemeMode::from_str(s.trim()).ok())
      .unwrap_or_default()
  }

  pub fn save_theme(&self, mode: ThemeMode) {
    if fs::create_dir_all(&self.root).is_ok() {
      let _ = fs::write(self.root.join(THEME_FILE), mode.as_str());
    }
  }

  /// The stored history, or empty when the file is missing or corrupted.
  pub fn load_history(&self) -> Vec<HistoryEntry> {
    if let Ok(contents) = fs::read_to_string(self.root.join(HISTORY_FILE)) {
      if let Ok(mut history) = serde_json::from_str::<Vec<HistoryEntry>>(&contents) {
        history.truncate(HISTORY_LIMIT);
        return history;
      }
    }
    Vec::new()
  }

  pub fn save_history(&self, history: &[HistoryEntry]) {
    if fs::create_dir_all(&self.root).is_err() {
      return;
    }
    if let Ok(json) = serde_json::to_string_pretty(history) {
      let _ = fs::write(self.root.join(HISTORY_FILE), json);
    }
  }
}
