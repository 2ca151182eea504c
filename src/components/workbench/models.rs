use query_sandbox_theme::ThemeMode;
use serde::{Deserialize, Serialize};

use crate::{
  catalog::{Catalog, TableResult},
  storage::{Storage, HISTORY_LIMIT},
};

/// One previously-run query. Persisted as `{id, query, timestamp}` with a
/// millisecond timestamp; `id` is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
  pub id: String,
  pub query: String,
  pub timestamp: u64,
}

impl HistoryEntry {
  pub fn new(query: String) -> Self {
    let timestamp = chrono::Utc::now().timestamp_millis() as u64;
    Self { id: timestamp.to_string(), query, timestamp }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
  #[default]
  Query,
  History,
}

/// The single mutable application state. Only the workbench reducer writes
/// to it; rendering reads it. Loading suppresses both result and error;
/// error suppresses result.
#[derive(Debug, Clone)]
pub struct ViewState {
  pub theme: ThemeMode,
  pub selected_query_index: usize,
  pub results: Option<TableResult>,
  pub is_loading: bool,
  pub error_message: Option<String>,
  pub history: Vec<HistoryEntry>,
  /// Monotonic run counter. Only the completion stamped with the latest
  /// generation is applied; stale completions are discarded.
  pub run_generation: u64,
}

impl ViewState {
  /// Initial state: theme and history restored from storage, first catalog
  /// query selected, nothing run yet.
  pub fn restore(storage: &Storage) -> Self {
    Self {
      theme: storage.load_theme(),
      selected_query_index: 0,
      results: None,
      is_loading: false,
      error_message: None,
      history: storage.load_history(),
      run_generation: 0,
    }
  }

  pub fn selected_query_id(&self, catalog: &Catalog) -> Option<String> {
    catalog.queries().get(self.selected_query_index).map(|q| q.id.clone())
  }

  /// Starts a run: bumps the generation, enters loading, clears any prior
  /// error. Returns the generation stamped onto this run.
  pub fn begin_run(&mut self) -> u64 {
    self.run_generation += 1;
    self.is_loading = true;
    self.error_message = None;
    self.run_generation
  }

  /// True when `generation` is the latest issued run.
  pub fn is_current_run(&self, generation: u64) -> bool {
    generation == self.run_generation
  }

  pub fn finish_run_ok(&mut self, result: TableResult) {
    self.is_loading = false;
    self.error_message = None;
    self.results = Some(result);
  }

  pub fn finish_run_err(&mut self, message: String) {
    self.is_loading = false;
    self.results = None;
    self.error_message = Some(message);
  }

  /// Prepends an entry and truncates to the newest [`HISTORY_LIMIT`].
  pub fn push_history(&mut self, entry: HistoryEntry) {
    self.history.insert(0, entry);
    self.history.truncate(HISTORY_LIMIT);
  }
}
