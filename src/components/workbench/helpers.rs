use std::fs;
use std::time::{Duration, Instant};

use chrono::{Local, TimeZone};
use ratatui::{prelude::*, widgets::Cell};
use query_sandbox_theme as theme;

use super::Workbench;
use crate::export::result_to_csv;

const EXPORT_STATUS_TTL: Duration = Duration::from_secs(3);

impl Workbench {
  /// Writes the current result set to `query_results_<timestamp>.csv` in the
  /// working directory and records a status line for the footer.
  pub(super) fn export_results_to_csv(&mut self) {
    let Some(result) = self.view.results.as_ref() else {
      self.export_status = Some(("No results to export".to_string(), Instant::now()));
      return;
    };

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("query_results_{timestamp}.csv");
    match fs::write(&filename, result_to_csv(result)) {
      Ok(()) => {
        self.export_status = Some((format!("Exported to: {filename}"), Instant::now()));
      },
      Err(e) => {
        log::error!("csv export failed: {e}");
        self.export_status = Some((format!("Export failed: {e}"), Instant::now()));
      },
    }
  }

  pub(super) fn copy_query_to_clipboard(&mut self) {
    let text = self.query_text();
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
      Ok(()) => {
        self.export_status = Some(("Query copied to clipboard".to_string(), Instant::now()));
      },
      Err(e) => {
        log::warn!("clipboard unavailable: {e}");
      },
    }
  }

  pub(super) fn expire_export_status(&mut self) {
    if let Some((_, shown_at)) = self.export_status {
      if shown_at.elapsed() > EXPORT_STATUS_TTL {
        self.export_status = None;
      }
    }
  }

  pub(super) fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
      ])
      .split(r);

    Layout::default()
      .direction(Direction::Horizontal)
      .constraints([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
      ])
      .split(popup_layout[1])[1]
  }
}

/// Renders a history timestamp (unix millis) as local wall-clock time.
pub(super) fn format_history_timestamp(millis: u64) -> String {
  match Local.timestamp_millis_opt(millis as i64) {
    chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S").to_string(),
    _ => "--:--:--".to_string(),
  }
}

pub(super) fn create_header_cell(header: &str) -> Cell<'static> {
  Cell::from(header.chars().take(20).collect::<String>()).style(theme::header())
}
