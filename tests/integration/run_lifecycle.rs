use pretty_assertions::assert_eq;

use query_sandbox::{action::Action, catalog::Catalog, components::Component, storage::HISTORY_LIMIT};

use crate::test_utils::TestWorkbench;

#[test]
fn inventory_query_returns_its_canned_rows() {
  let mut tw = TestWorkbench::new();
  let catalog = Catalog::builtin();
  let index = catalog.queries().iter().position(|q| q.id == "3").unwrap();
  for _ in 0..index {
    tw.apply(Action::CatalogMoveDown);
  }
  tw.apply(Action::LoadSelectedQuery);
  tw.run_query();

  let result = tw.workbench.view.results.as_ref().unwrap();
  let expected_columns: Vec<String> =
    ["product_name", "category", "stock_quantity", "unit_price"].iter().map(|s| s.to_string()).collect();
  assert_eq!(result.columns, expected_columns);
  assert_eq!(result.row_count(), 3);
  assert_eq!(tw.workbench.view.history[0].query, catalog.queries()[index].sql);
}

#[test]
fn every_catalog_query_runs_with_its_stored_text() {
  let mut tw = TestWorkbench::new();
  let catalog = Catalog::builtin();
  for query in catalog.queries() {
    tw.workbench.set_query_text(&query.sql);
    let index = catalog.queries().iter().position(|q| q.id == query.id).unwrap();
    tw.workbench.view.selected_query_index = index;
    tw.run_query();
    let expected = catalog.result_for(&query.id).unwrap();
    assert_eq!(tw.workbench.view.results.as_ref(), Some(expected), "query {} diverged", query.id);
  }
}

#[test]
fn history_holds_ten_newest_runs() {
  let mut tw = TestWorkbench::new();
  for i in 0..(HISTORY_LIMIT + 5) {
    tw.workbench.set_query_text(&format!("SELECT {i} FROM samples"));
    tw.run_query();
  }
  let history = &tw.workbench.view.history;
  assert_eq!(history.len(), HISTORY_LIMIT);
  assert_eq!(history[0].query, format!("SELECT {} FROM samples", HISTORY_LIMIT + 4));
  assert_eq!(history[HISTORY_LIMIT - 1].query, "SELECT 5 FROM samples");
}

#[test]
fn failed_runs_never_enter_history() {
  let mut tw = TestWorkbench::new();
  tw.workbench.set_query_text("TRUNCATE samples;");
  tw.run_query();
  tw.workbench.set_query_text("");
  tw.run_query();
  assert!(tw.workbench.view.history.is_empty());
}

#[test]
fn stale_completion_cannot_overwrite_newer_run() {
  let mut tw = TestWorkbench::new();
  // Two runs issued back to back; the older completion arrives last.
  let stale = match tw.workbench.update(Action::ExecuteQuery).unwrap() {
    Some(Action::RunQuery { generation, .. }) => generation,
    other => panic!("expected RunQuery, got {other:?}"),
  };
  tw.run_query();
  let settled = tw.workbench.view.results.clone();
  assert!(settled.is_some());

  let empty = query_sandbox::catalog::TableResult::default();
  tw.apply(Action::QueryFinished { generation: stale, outcome: Ok(empty) });
  assert_eq!(tw.workbench.view.results, settled);
}
