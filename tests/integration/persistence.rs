use pretty_assertions::assert_eq;

use query_sandbox::{action::Action, components::workbench::Workbench};

use crate::test_utils::TestWorkbench;

#[test]
fn history_survives_restart_newest_first() {
  let mut tw = TestWorkbench::new();
  for i in 0..3 {
    tw.workbench.set_query_text(&format!("SELECT {i} FROM samples"));
    tw.run_query();
  }

  let reopened = Workbench::with_storage(tw.storage());
  let queries: Vec<&str> = reopened.view.history.iter().map(|e| e.query.as_str()).collect();
  assert_eq!(queries, vec!["SELECT 2 FROM samples", "SELECT 1 FROM samples", "SELECT 0 FROM samples"]);
}

#[test]
fn theme_survives_restart() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::ToggleTheme);
  assert_eq!(tw.workbench.view.theme, query_sandbox_theme::ThemeMode::Dark);

  let reopened = Workbench::with_storage(tw.storage());
  assert_eq!(reopened.view.theme, query_sandbox_theme::ThemeMode::Dark);
}

#[test]
fn results_and_errors_are_not_persisted() {
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text("not a select");
  tw.run_query();
  assert!(tw.workbench.view.error_message.is_some());

  let reopened = Workbench::with_storage(tw.storage());
  assert!(reopened.view.results.is_none());
  assert!(reopened.view.error_message.is_none());
  assert!(!reopened.view.is_loading);
}
