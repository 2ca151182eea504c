use color_eyre::eyre::Result;

use super::{EditorTab, Workbench, VISIBLE_COLUMNS};
use crate::{action::Action, components::ComponentKind, executor::ExecuteError};

impl Workbench {
  pub fn reduce(&mut self, action: Action) -> Result<Option<Action>> {
    match action {
      Action::Tick => {
        self.expire_export_status();
        Ok(None)
      },
      Action::Help => {
        self.show_help = !self.show_help;
        Ok(None)
      },
      Action::Error(message) => {
        self.view.error_message = Some(message);
        Ok(None)
      },
      Action::FocusCatalog => Ok(Some(Action::SelectComponent(ComponentKind::Catalog))),
      Action::FocusEditor => Ok(Some(Action::SelectComponent(ComponentKind::Editor))),
      Action::FocusResults => Ok(Some(Action::SelectComponent(ComponentKind::Results))),
      Action::SelectComponent(kind) => {
        self.selected_component = kind;
        Ok(None)
      },
      Action::CatalogMoveUp => {
        self.catalog_move(-1);
        Ok(None)
      },
      Action::CatalogMoveDown => {
        self.catalog_move(1);
        Ok(None)
      },
      Action::LoadSelectedQuery => {
        self.load_selected_query();
        Ok(None)
      },
      Action::ToggleHistoryTab => {
        self.toggle_history_tab();
        Ok(None)
      },
      Action::ExecuteQuery => Ok(self.start_run()),
      Action::QueryFinished { generation, outcome } => {
        self.apply_run_outcome(generation, outcome);
        Ok(None)
      },
      Action::ToggleTheme => {
        self.toggle_theme();
        Ok(None)
      },
      Action::ClearQuery => {
        self.set_query_text("");
        self.view.error_message = None;
        Ok(None)
      },
      Action::CopyQuery => {
        self.copy_query_to_clipboard();
        Ok(None)
      },
      Action::ExportResultsToCsv => {
        self.export_results_to_csv();
        Ok(None)
      },
      Action::RowMoveUp => {
        self.move_row_selection(-1);
        Ok(None)
      },
      Action::RowMoveDown => {
        self.move_row_selection(1);
        Ok(None)
      },
      Action::RowPageUp => {
        self.move_row_selection(-(self.results_page_size as isize));
        Ok(None)
      },
      Action::RowPageDown => {
        self.move_row_selection(self.results_page_size as isize);
        Ok(None)
      },
      Action::RowJumpToTop => {
        self.selected_row_index = 0;
        self.row_offset = 0;
        Ok(None)
      },
      Action::RowJumpToBottom => {
        let count = self.result_row_count();
        if count > 0 {
          self.selected_row_index = count - 1;
          self.row_offset = count.saturating_sub(self.results_page_size);
        }
        Ok(None)
      },
      Action::ScrollTableLeft => {
        self.horizontal_scroll_offset = self.horizontal_scroll_offset.saturating_sub(1);
        Ok(None)
      },
      Action::ScrollTableRight => {
        let column_count = self.view.results.as_ref().map(|r| r.columns.len()).unwrap_or(0);
        let max_offset = column_count.saturating_sub(VISIBLE_COLUMNS);
        if self.horizontal_scroll_offset < max_offset {
          self.horizontal_scroll_offset += 1;
        }
        Ok(None)
      },
      _ => Ok(None),
    }
  }

  fn catalog_move(&mut self, delta: isize) {
    let count = self.catalog.queries().len();
    if count == 0 {
      return;
    }
    let current = self.view.selected_query_index as isize;
    let next = (current + delta).rem_euclid(count as isize);
    self.view.selected_query_index = next as usize;
  }

  /// Loads the highlighted catalog entry into the editor, replacing its text.
  pub fn load_selected_query(&mut self) {
    if let Some(query) = self.catalog.queries().get(self.view.selected_query_index) {
      let sql = query.sql.clone();
      self.set_query_text(&sql);
      self.view.error_message = None;
      self.selected_tab = EditorTab::Query;
    }
  }

  fn toggle_history_tab(&mut self) {
    self.selected_tab = match self.selected_tab {
      EditorTab::Query => EditorTab::History,
      EditorTab::History => EditorTab::Query,
    };
    self.selected_history_index = 0;
  }

  /// Kicks off a run: marks the view as loading, hands the run's generation
  /// number to the executor task, and remembers the text for history.
  fn start_run(&mut self) -> Option<Action> {
    let text = self.query_text();
    let query_id = self.selected_query_id();
    let generation = self.view.begin_run();
    self.last_executed_query = Some(text.clone());
    Some(Action::RunQuery { generation, query_id, text })
  }

  /// Applies a finished run to the view, unless a newer run superseded it.
  fn apply_run_outcome(&mut self, generation: u64, outcome: Result<crate::catalog::TableResult, ExecuteError>) {
    if !self.view.is_current_run(generation) {
      log::debug!("discarding stale run result (generation {generation})");
      return;
    }
    match outcome {
      Ok(result) => {
        self.view.finish_run_ok(result);
        self.selected_row_index = 0;
        self.row_offset = 0;
        self.horizontal_scroll_offset = 0;
        if let Some(text) = self.last_executed_query.take() {
          self.view.push_history(super::HistoryEntry::new(text));
          self.storage.save_history(&self.view.history);
        }
      },
      Err(err) => {
        self.view.finish_run_err(err.to_string());
      },
    }
  }

  fn toggle_theme(&mut self) {
    self.view.theme = self.view.theme.toggle();
    query_sandbox_theme::set_mode(self.view.theme);
    self.storage.save_theme(self.view.theme);
  }

  pub fn result_row_count(&self) -> usize {
    self.view.results.as_ref().map(|r| r.row_count()).unwrap_or(0)
  }

  fn move_row_selection(&mut self, delta: isize) {
    let count = self.result_row_count();
    if count == 0 {
      return;
    }
    let next = (self.selected_row_index as isize + delta).clamp(0, count as isize - 1) as usize;
    self.selected_row_index = next;
    // Keep the selection inside the visible window.
    if next < self.row_offset {
      self.row_offset = next;
    } else if next >= self.row_offset + self.results_page_size {
      self.row_offset = next + 1 - self.results_page_size;
    }
  }
}
