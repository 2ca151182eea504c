use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{EditorTab, Workbench};
use crate::{action::Action, components::ComponentKind};

impl Workbench {
  pub(super) fn on_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    // Error dismissal and popup close take priority over everything else.
    if key.code == KeyCode::Esc {
      if self.view.error_message.is_some() {
        self.view.error_message = None;
        return Ok(Some(Action::Render));
      }
      if self.show_help {
        self.show_help = false;
        return Ok(Some(Action::Render));
      }
    }

    let is_editing = self.selected_component == ComponentKind::Editor && self.selected_tab == EditorTab::Query;

    if !is_editing {
      match key.code {
        KeyCode::Char('?') => {
          self.show_help = !self.show_help;
          return Ok(Some(Action::Render));
        },
        KeyCode::Char('1') => return Ok(Some(Action::SelectComponent(ComponentKind::Catalog))),
        KeyCode::Char('2') => return Ok(Some(Action::SelectComponent(ComponentKind::Editor))),
        KeyCode::Char('3') => return Ok(Some(Action::SelectComponent(ComponentKind::Results))),
        _ => {},
      }
    }

    match self.selected_component {
      ComponentKind::Catalog => self.on_catalog_key(key),
      ComponentKind::Editor => match self.selected_tab {
        EditorTab::Query => self.on_editor_key(key),
        EditorTab::History => self.on_history_key(key),
      },
      ComponentKind::Results => self.on_results_key(key),
    }
  }

  fn on_catalog_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    match key.code {
      KeyCode::Up | KeyCode::Char('k') => Ok(Some(Action::CatalogMoveUp)),
      KeyCode::Down | KeyCode::Char('j') => Ok(Some(Action::CatalogMoveDown)),
      KeyCode::Enter => {
        self.load_selected_query();
        Ok(Some(Action::SelectComponent(ComponentKind::Editor)))
      },
      _ => Ok(None),
    }
  }

  fn on_editor_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    // Ctrl-modified chords are reserved for the config keybindings
    // (execute, theme toggle, export, history tab and friends).
    if key.modifiers.contains(KeyModifiers::CONTROL) {
      return Ok(None);
    }
    self.editor.input(key);
    Ok(Some(Action::Render))
  }

  fn on_history_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    let count = self.view.history.len();
    match key.code {
      KeyCode::Up | KeyCode::Char('k') => {
        self.selected_history_index = self.selected_history_index.saturating_sub(1);
        Ok(Some(Action::Render))
      },
      KeyCode::Down | KeyCode::Char('j') => {
        if count > 0 && self.selected_history_index < count - 1 {
          self.selected_history_index += 1;
        }
        Ok(Some(Action::Render))
      },
      KeyCode::Enter => {
        // Recall the entry into the editor and switch back to the query tab.
        if let Some(entry) = self.view.history.get(self.selected_history_index) {
          let text = entry.query.clone();
          self.set_query_text(&text);
          self.selected_tab = EditorTab::Query;
          self.view.error_message = None;
        }
        Ok(Some(Action::Render))
      },
      _ => Ok(None),
    }
  }

  fn on_results_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
    match key.code {
      KeyCode::Up | KeyCode::Char('k') => Ok(Some(Action::RowMoveUp)),
      KeyCode::Down | KeyCode::Char('j') => Ok(Some(Action::RowMoveDown)),
      KeyCode::PageUp => Ok(Some(Action::RowPageUp)),
      KeyCode::PageDown => Ok(Some(Action::RowPageDown)),
      KeyCode::Char('g') | KeyCode::Home => Ok(Some(Action::RowJumpToTop)),
      KeyCode::Char('G') | KeyCode::End => Ok(Some(Action::RowJumpToBottom)),
      KeyCode::Left | KeyCode::Char('h') => Ok(Some(Action::ScrollTableLeft)),
      KeyCode::Right | KeyCode::Char('l') => Ok(Some(Action::ScrollTableRight)),
      KeyCode::Char('e') => Ok(Some(Action::ExportResultsToCsv)),
      KeyCode::Char('y') => Ok(Some(Action::CopyQuery)),
      _ => Ok(None),
    }
  }
}
