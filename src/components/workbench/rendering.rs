use color_eyre::eyre::Result;
use query_sandbox_theme as theme;
use ratatui::{
  prelude::*,
  widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Tabs},
};

use super::helpers::{create_header_cell, format_history_timestamp};
use super::{EditorTab, Workbench, VISIBLE_COLUMNS};
use crate::catalog::display_value;
use crate::components::ComponentKind;

impl Workbench {
  pub(super) fn render(&mut self, f: &mut Frame<'_>, _area: Rect) -> Result<()> {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(3), Constraint::Min(1)])
      .split(f.area());

    let title_block = Block::default()
      .borders(Borders::ALL)
      .border_style(theme::border_normal())
      .border_type(BorderType::Rounded)
      .style(theme::bg_primary());

    let title_text = format!(
      "Query Sandbox - [1] Queries [2] Editor [3] Results - theme: {}",
      self.view.theme.as_str()
    );
    let title = Paragraph::new(Text::styled(title_text, theme::title())).block(title_block);
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
      .split(chunks[1]);

    self.render_catalog(f, body[0]);
    self.render_right_pane(f, body[1])?;

    self.render_error(f);
    self.render_help(f);

    Ok(())
  }

  fn render_catalog(&mut self, f: &mut Frame<'_>, area: Rect) {
    let is_focused = self.selected_component == ComponentKind::Catalog;
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(if is_focused { theme::border_focused() } else { theme::border_normal() })
      .title("[1] Sample Queries")
      .title_style(theme::title())
      .border_type(BorderType::Rounded);

    let items: Vec<ListItem> = self
      .catalog
      .queries()
      .iter()
      .map(|q| ListItem::new(q.name.clone()))
      .collect();

    let list = List::new(items)
      .block(block)
      .style(theme::bg_primary())
      .highlight_style(theme::selection_active());

    let mut state = ListState::default();
    state.select(Some(self.view.selected_query_index));
    f.render_stateful_widget(list, area, &mut state);
  }

  fn render_right_pane(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(2), Constraint::Length(12), Constraint::Min(1)])
      .split(area);

    let tabs = Tabs::new(["Query [C-h]", "History [C-h]"])
      .style(theme::tab_normal())
      .highlight_style(theme::tab_selected())
      .select(self.selected_tab as usize)
      .padding("", "")
      .divider(" ");
    f.render_widget(tabs, chunks[0]);

    match self.selected_tab {
      EditorTab::Query => self.render_editor(f, chunks[1]),
      EditorTab::History => self.render_history_list(f, chunks[1]),
    }

    self.render_results(f, chunks[2]);
    Ok(())
  }

  fn render_editor(&mut self, f: &mut Frame<'_>, area: Rect) {
    let is_focused = self.selected_component == ComponentKind::Editor;
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(if is_focused { theme::border_focused() } else { theme::border_normal() })
      .title("[2] Query Editor - [C-Enter] Run [C-x] Clear [C-y] Copy")
      .title_style(theme::title())
      .border_type(BorderType::Rounded);

    self.editor.set_block(block);
    self.editor.set_style(theme::input());
    self.editor.set_line_number_style(theme::line_numbers());
    self.editor.set_cursor_line_style(Style::default());
    f.render_widget(&self.editor, area);
  }

  fn render_history_list(&mut self, f: &mut Frame<'_>, area: Rect) {
    let is_focused = self.selected_component == ComponentKind::Editor;
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(if is_focused { theme::border_focused() } else { theme::border_normal() })
      .title("[2] Query History - [Enter] Recall")
      .title_style(theme::title())
      .border_type(BorderType::Rounded);

    if self.view.history.is_empty() {
      let empty = Paragraph::new("No query history available")
        .block(block)
        .style(theme::muted())
        .alignment(Alignment::Center);
      f.render_widget(empty, area);
      return;
    }

    let header = Row::new(["#", "Time", "Query"].iter().map(|h| Cell::from(*h).style(theme::header())))
      .height(1)
      .style(theme::header())
      .bottom_margin(1);

    let rows: Vec<Row> = self
      .view
      .history
      .iter()
      .enumerate()
      .map(|(i, entry)| {
        let query = entry.query.replace('\n', " ");
        let style = if i == self.selected_history_index && is_focused {
          theme::selection_active()
        } else {
          theme::bg_primary()
        };
        Row::new([
          Cell::from(format!("{}", i + 1)),
          Cell::from(format_history_timestamp(entry.timestamp)),
          Cell::from(query),
        ])
        .style(style)
      })
      .collect();

    let table = Table::new(rows, [Constraint::Length(3), Constraint::Length(9), Constraint::Min(10)])
      .header(header)
      .block(block)
      .style(theme::bg_primary());
    f.render_widget(table, area);
  }

  fn render_results(&mut self, f: &mut Frame<'_>, area: Rect) {
    let is_focused = self.selected_component == ComponentKind::Results;
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(if is_focused { theme::border_focused() } else { theme::border_normal() })
      .title(self.results_title())
      .title_style(theme::title())
      .border_type(BorderType::Rounded);

    // Block border (2) plus header row and its margin (2).
    self.results_page_size = area.height.saturating_sub(4).max(1) as usize;

    if self.view.is_loading {
      let loading = Paragraph::new("Executing query...")
        .block(block)
        .style(theme::info())
        .alignment(Alignment::Center);
      f.render_widget(loading, area);
      return;
    }

    let Some(result) = self.view.results.as_ref() else {
      let placeholder = Paragraph::new("Run a query to see results")
        .block(block)
        .style(theme::muted())
        .alignment(Alignment::Center);
      f.render_widget(placeholder, area);
      return;
    };

    let column_window: Vec<&String> =
      result.columns.iter().skip(self.horizontal_scroll_offset).take(VISIBLE_COLUMNS).collect();

    let header = Row::new(column_window.iter().map(|h| create_header_cell(h.as_str())))
      .height(1)
      .style(theme::header())
      .bottom_margin(1);

    // Only the visible window of rows is materialized.
    let end = (self.row_offset + self.results_page_size).min(result.row_count());
    let rows: Vec<Row> = result.rows[self.row_offset..end]
      .iter()
      .enumerate()
      .map(|(i, row)| {
        let absolute = self.row_offset + i;
        let cells = column_window
          .iter()
          .map(|col| Cell::from(row.get(col.as_str()).map(display_value).unwrap_or_default()));
        let style = if absolute == self.selected_row_index && is_focused {
          theme::selection_active()
        } else {
          theme::bg_primary()
        };
        Row::new(cells).height(1).style(style)
      })
      .collect();

    let widths: Vec<Constraint> = column_window.iter().map(|_| Constraint::Min(10)).collect();
    let table = Table::new(rows, widths).header(header).block(block).style(theme::bg_primary());
    f.render_widget(table, area);
  }

  fn results_title(&self) -> String {
    if let Some((status, _)) = &self.export_status {
      return format!("[3] Results - {status}");
    }
    match self.view.results.as_ref() {
      Some(result) if !self.view.is_loading => {
        let total_columns = result.columns.len();
        if total_columns > VISIBLE_COLUMNS {
          let first = self.horizontal_scroll_offset + 1;
          let last = (self.horizontal_scroll_offset + VISIBLE_COLUMNS).min(total_columns);
          format!("[3] Results - {} rows returned (cols {first}-{last}/{total_columns})", result.row_count())
        } else {
          format!("[3] Results - {} rows returned", result.row_count())
        }
      },
      _ => "[3] Results".to_string(),
    }
  }

  fn render_error(&mut self, f: &mut Frame<'_>) {
    let Some(message) = self.view.error_message.clone() else {
      return;
    };
    let area = self.centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(theme::error())
      .title("Error - [Esc] Dismiss")
      .title_style(theme::error())
      .border_type(BorderType::Rounded);
    let error = Paragraph::new(message)
      .block(block)
      .style(theme::error())
      .alignment(Alignment::Center)
      .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(error, area);
  }

  fn render_help(&mut self, f: &mut Frame<'_>) {
    if !self.show_help {
      return;
    }
    let area = self.centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);
    let block = Block::default()
      .borders(Borders::ALL)
      .border_style(theme::border_focused())
      .title("Help - [Esc] Close")
      .title_style(theme::title())
      .border_type(BorderType::Rounded);

    let lines = vec![
      Line::from("1/2/3        switch pane (outside the editor)"),
      Line::from("Ctrl-k       focus the query list from anywhere"),
      Line::from("j/k          move selection"),
      Line::from("Enter        load query / recall history entry"),
      Line::from("Ctrl-Enter   run query"),
      Line::from("Ctrl-h       toggle history tab"),
      Line::from("Ctrl-t       toggle light/dark theme"),
      Line::from("Ctrl-x       clear editor"),
      Line::from("Ctrl-y / y   copy query to clipboard"),
      Line::from("Ctrl-e / e   export results to CSV"),
      Line::from("h/l          scroll result columns"),
      Line::from("g/G          jump to first/last row"),
      Line::from("q / Ctrl-c   quit"),
    ];
    let help = Paragraph::new(lines).block(block).style(theme::bg_primary());
    f.render_widget(help, area);
  }
}
