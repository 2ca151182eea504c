use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static CATALOG_DATA: &str = include_str!("../data/catalog.json");

/// A named sample query. The catalog is fixed at startup; the editor may
/// diverge from `sql` once the user starts typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefinition {
  pub id: String,
  pub name: String,
  pub sql: String,
}

pub type ResultRow = serde_json::Map<String, Value>;

/// A canned result set: ordered column names plus rows keyed by column name.
/// Cell values are heterogeneous scalars (string, number, null).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableResult {
  pub columns: Vec<String>,
  pub rows: Vec<ResultRow>,
}

impl TableResult {
  pub fn row_count(&self) -> usize {
    self.rows.len()
  }

  pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
    self.rows.get(row).and_then(|r| r.get(column))
  }
}

/// The static query catalog: an ordered list of sample queries and the
/// mapping from query id to its canned result.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
  queries: Vec<QueryDefinition>,
  results: HashMap<String, TableResult>,
}

impl Catalog {
  /// The embedded catalog, parsed once on first use.
  pub fn builtin() -> &'static Catalog {
    static CATALOG: Lazy<Catalog> =
      Lazy::new(|| serde_json::from_str(CATALOG_DATA).expect("embedded catalog data is valid JSON"));
    &CATALOG
  }

  pub fn queries(&self) -> &[QueryDefinition] {
    &self.queries
  }

  pub fn query(&self, id: &str) -> Option<&QueryDefinition> {
    self.queries.iter().find(|q| q.id == id)
  }

  pub fn result_for(&self, id: &str) -> Option<&TableResult> {
    self.results.get(id)
  }
}

/// Raw scalar stringification for grid cells. Strings render their inner
/// text, null renders as `NULL`, everything else uses the JSON rendering.
pub fn display_value(value: &Value) -> String {
  match value {
    Value::Null => "NULL".to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
