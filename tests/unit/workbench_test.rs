use pretty_assertions::assert_eq;
use rstest::rstest;

use query_sandbox::{action::Action, catalog::Catalog, components::ComponentKind};

use crate::test_utils::TestWorkbench;

#[test]
fn starts_on_catalog_with_first_query_loaded() {
  let tw = TestWorkbench::new();
  assert_eq!(tw.workbench.selected_component, ComponentKind::Catalog);
  assert_eq!(tw.workbench.view.selected_query_index, 0);
  let first = Catalog::builtin().queries().first().unwrap().sql.clone();
  assert_eq!(tw.workbench.query_text(), first);
}

#[test]
fn focus_actions_route_to_select_component() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::FocusResults);
  assert_eq!(tw.workbench.selected_component, ComponentKind::Results);
  tw.apply(Action::FocusEditor);
  assert_eq!(tw.workbench.selected_component, ComponentKind::Editor);
  tw.apply(Action::FocusCatalog);
  assert_eq!(tw.workbench.selected_component, ComponentKind::Catalog);
}

#[test]
fn load_selected_query_replaces_editor_text() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::CatalogMoveDown);
  tw.apply(Action::CatalogMoveDown);
  tw.apply(Action::LoadSelectedQuery);
  let expected = Catalog::builtin().queries()[2].sql.clone();
  assert_eq!(tw.workbench.query_text(), expected);
}

#[test]
fn clear_query_empties_editor_and_dismisses_error() {
  let mut tw = TestWorkbench::new();
  tw.workbench.view.error_message = Some("Only SELECT queries are supported".into());
  tw.apply(Action::ClearQuery);
  assert_eq!(tw.workbench.query_text(), "");
  assert_eq!(tw.workbench.view.error_message, None);
}

#[test]
fn empty_editor_run_surfaces_empty_query_error() {
  let mut tw = TestWorkbench::new();
  tw.apply(Action::ClearQuery);
  tw.run_query();
  assert_eq!(tw.workbench.view.error_message.as_deref(), Some("Query cannot be empty"));
  assert!(tw.workbench.view.results.is_none());
  assert!(!tw.workbench.view.is_loading);
}

#[rstest]
#[case("UPDATE users SET name = 'x';")]
#[case("DELETE FROM orders")]
#[case("INSERT INTO t VALUES (1)")]
#[case("just some prose")]
fn non_select_run_surfaces_unsupported_error(#[case] text: &str) {
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text(text);
  tw.run_query();
  assert_eq!(tw.workbench.view.error_message.as_deref(), Some("Only SELECT queries are supported"));
  assert!(tw.workbench.view.results.is_none());
}

#[test]
fn successful_run_replaces_prior_error_and_results() {
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text("DROP TABLE x;");
  tw.run_query();
  assert!(tw.workbench.view.error_message.is_some());

  tw.apply(Action::LoadSelectedQuery);
  tw.run_query();
  assert_eq!(tw.workbench.view.error_message, None);
  let expected = Catalog::builtin().result_for("1").unwrap();
  assert_eq!(tw.workbench.view.results.as_ref(), Some(expected));
}

#[test]
fn edited_select_text_still_returns_selected_querys_result() {
  // Execution is a lookup keyed by the selected query, not a parse of the
  // editor text.
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text("SELECT something_else FROM nowhere");
  tw.run_query();
  let expected = Catalog::builtin().result_for("1").unwrap();
  assert_eq!(tw.workbench.view.results.as_ref(), Some(expected));
}
