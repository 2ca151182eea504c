use pretty_assertions::assert_eq;
use serial_test::serial;

use query_sandbox::{action::Action, catalog::Catalog, components::ComponentKind};

use crate::test_utils::{EventBuilder, TestWorkbench};

#[test]
fn browse_load_run_inspect_workflow() {
  let mut tw = TestWorkbench::new();

  // Walk down the catalog and load the third sample query.
  tw.send_keys(EventBuilder::new().keys("jj").enter().build());
  assert_eq!(tw.workbench.selected_component, ComponentKind::Editor);
  let expected_sql = Catalog::builtin().queries()[2].sql.clone();
  assert_eq!(tw.workbench.query_text(), expected_sql);

  tw.run_query();
  assert!(tw.workbench.view.results.is_some());

  // While the editor has focus digits are text, so move focus by action
  // the way the Ctrl-chord keybindings would.
  tw.apply(Action::FocusResults);
  assert_eq!(tw.workbench.selected_component, ComponentKind::Results);
  tw.send_keys(EventBuilder::new().keys("jj").build());
  let rows = tw.workbench.view.results.as_ref().unwrap().row_count();
  assert_eq!(tw.workbench.selected_row_index, 2.min(rows - 1));
  tw.send_keys(EventBuilder::new().key('G').build());
  assert_eq!(tw.workbench.selected_row_index, rows - 1);
  tw.send_keys(EventBuilder::new().key('g').build());
  assert_eq!(tw.workbench.selected_row_index, 0);
}

#[test]
fn typing_in_editor_feeds_the_textarea() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::ClearQuery);
  tw.apply(Action::FocusEditor);
  tw.send_keys(EventBuilder::new().keys("select 1").build());
  assert_eq!(tw.workbench.query_text(), "select 1");
  tw.run_query();
  // Whatever was typed, the run resolves against the selected catalog query.
  assert_eq!(tw.workbench.view.results.as_ref(), Catalog::builtin().result_for("1"));
}

#[test]
fn error_popup_blocks_until_dismissed() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::ClearQuery);
  tw.run_query();
  assert_eq!(tw.workbench.view.error_message.as_deref(), Some("Query cannot be empty"));

  tw.send_keys(EventBuilder::new().esc().build());
  assert_eq!(tw.workbench.view.error_message, None);
}

#[test]
fn history_tab_recalls_a_previous_run() {
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text("SELECT id, name FROM customers");
  tw.run_query();

  tw.apply(Action::FocusEditor);
  tw.apply(Action::ToggleHistoryTab);
  tw.apply(Action::ClearQuery);
  tw.send_keys(EventBuilder::new().enter().build());
  assert_eq!(tw.workbench.query_text(), "SELECT id, name FROM customers");
}

#[test]
#[serial]
fn export_writes_csv_into_working_directory() {
  let cwd = tempfile::TempDir::new().unwrap();
  let original = std::env::current_dir().unwrap();
  std::env::set_current_dir(cwd.path()).unwrap();

  let mut tw = TestWorkbench::new();
  tw.run_query();
  tw.apply(Action::ExportResultsToCsv);

  let exported: Vec<_> = std::fs::read_dir(cwd.path())
    .unwrap()
    .filter_map(|e| e.ok())
    .filter(|e| e.file_name().to_string_lossy().starts_with("query_results_"))
    .collect();
  std::env::set_current_dir(original).unwrap();

  assert_eq!(exported.len(), 1);
  let contents = std::fs::read_to_string(exported[0].path()).unwrap();
  let expected = query_sandbox::export::result_to_csv(Catalog::builtin().result_for("1").unwrap());
  assert_eq!(contents, expected);
  assert!(tw.workbench.export_status.is_some());
}

#[test]
#[serial]
fn export_without_results_reports_status_and_writes_nothing() {
  let cwd = tempfile::TempDir::new().unwrap();
  let original = std::env::current_dir().unwrap();
  std::env::set_current_dir(cwd.path()).unwrap();

  let mut tw = TestWorkbench::new();
  tw.apply(Action::ExportResultsToCsv);
  let entries = std::fs::read_dir(cwd.path()).unwrap().count();
  std::env::set_current_dir(original).unwrap();

  assert_eq!(entries, 0);
  assert_eq!(tw.workbench.export_status.as_ref().map(|(s, _)| s.as_str()), Some("No results to export"));
}
