pub mod handlers;
pub mod helpers;
pub mod models;
pub mod rendering;
pub mod state;

// Re-export commonly used types
pub use models::{EditorTab, HistoryEntry, ViewState};

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::{Component, ComponentKind};
use crate::{action::Action, catalog::Catalog, config::Config, storage::Storage};

/// Column pages shown at once when the result set is wider than the pane.
const VISIBLE_COLUMNS: usize = 4;

/// The view shell: owns the [`ViewState`], the editor widget, and all
/// presentation-only state (focus, tabs, scroll offsets), and reacts to
/// actions and key events.
pub struct Workbench {
  pub command_tx: Option<UnboundedSender<Action>>,
  pub config: Config,
  pub catalog: &'static Catalog,
  pub storage: Storage,

  pub view: ViewState,
  pub last_executed_query: Option<String>,

  // Query editor
  pub editor: TextArea<'static>,
  pub selected_tab: EditorTab,
  pub selected_history_index: usize,

  // Results navigation
  pub selected_row_index: usize,
  pub row_offset: usize,
  pub horizontal_scroll_offset: usize,
  pub results_page_size: usize,

  // Component state
  pub selected_component: ComponentKind,
  pub show_help: bool,
  pub export_status: Option<(String, Instant)>,
}

impl Default for Workbench {
  fn default() -> Self {
    Self::new()
  }
}

impl Workbench {
  pub fn new() -> Self {
    Self::with_storage(Storage::default())
  }

  pub fn with_storage(storage: Storage) -> Self {
    let catalog = Catalog::builtin();
    let view = ViewState::restore(&storage);
    query_sandbox_theme::set_mode(view.theme);

    let initial_text = catalog.queries().first().map(|q| q.sql.clone()).unwrap_or_default();

    Self {
      command_tx: None,
      config: Config::default(),
      catalog,
      storage,
      view,
      last_executed_query: None,
      editor: Self::editor_from_text(&initial_text),
      selected_tab: EditorTab::Query,
      selected_history_index: 0,
      selected_row_index: 0,
      row_offset: 0,
      horizontal_scroll_offset: 0,
      results_page_size: 20,
      selected_component: ComponentKind::Catalog,
      show_help: false,
      export_status: None,
    }
  }

  fn editor_from_text(text: &str) -> TextArea<'static> {
    TextArea::from(text.lines().map(str::to_string).collect::<Vec<_>>())
  }

  pub fn query_text(&self) -> String {
    self.editor.lines().join("\n")
  }

  pub fn set_query_text(&mut self, text: &str) {
    self.editor = Self::editor_from_text(text);
  }

  pub fn selected_query_id(&self) -> String {
    self.view.selected_query_id(self.catalog).unwrap_or_default()
  }
}

impl Component for Workbench {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.command_tx = Some(tx);
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.config = config;
    Ok(())
  }

  fn init(&mut self, _area: Rect) -> Result<()> {
    Ok(())
  }

  fn handle_events(&mut self, event: Option<crate::tui::Event>) -> Result<Option<Action>> {
    match event {
      Some(crate::tui::Event::Key(key_event)) => self.on_key(key_event),
      _ => Ok(None),
    }
  }

  fn handle_key_events(&mut self, key: crossterm::event::KeyEvent) -> Result<Option<Action>> {
    self.on_key(key)
  }

  fn update(&mut self, action: Action) -> Result<Option<Action>> {
    self.reduce(action)
  }

  fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    self.render(f, area)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::Storage;
  use pretty_assertions::assert_eq;
  use tempfile::TempDir;

  fn workbench() -> (Workbench, TempDir) {
    let dir = TempDir::new().unwrap();
    let wb = Workbench::with_storage(Storage::with_root(dir.path().to_path_buf()));
    (wb, dir)
  }

  #[test]
  fn editor_seeds_from_first_catalog_query() {
    let (wb, _dir) = workbench();
    let first = wb.catalog.queries().first().unwrap().sql.clone();
    assert_eq!(wb.query_text(), first);
  }

  #[test]
  fn set_query_text_replaces_editor_contents() {
    let (mut wb, _dir) = workbench();
    wb.set_query_text("SELECT 1;\nSELECT 2;");
    assert_eq!(wb.query_text(), "SELECT 1;\nSELECT 2;");
    wb.set_query_text("");
    assert_eq!(wb.query_text(), "");
  }
}
