use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, TableResult};

/// Models network/compute delay. There is no real backend; the sleep is the
/// run's only suspension point and must never block the event loop.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Everything that can go wrong during a run. All three are recoverable:
/// the user edits or reselects and runs again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ExecuteError {
  #[error("Query cannot be empty")]
  EmptyQuery,
  #[error("Only SELECT queries are supported")]
  UnsupportedStatement,
  #[error("No results found for this query")]
  NoResultForQuery,
}

/// The superficial gate the playground applies instead of parsing. A
/// statement passes as long as it is non-blank and contains `select`
/// somewhere, case-insensitively.
pub fn validate(text: &str) -> Result<(), ExecuteError> {
  if text.trim().is_empty() {
    return Err(ExecuteError::EmptyQuery);
  }
  if !text.to_lowercase().contains("select") {
    return Err(ExecuteError::UnsupportedStatement);
  }
  Ok(())
}

/// Simulates query execution against the catalog's canned results.
#[derive(Debug, Clone)]
pub struct Executor {
  catalog: &'static Catalog,
  latency: Duration,
}

impl Default for Executor {
  fn default() -> Self {
    Self::new(Catalog::builtin(), SIMULATED_LATENCY)
  }
}

impl Executor {
  pub fn new(catalog: &'static Catalog, latency: Duration) -> Self {
    Self { catalog, latency }
  }

  /// One run: suspend for the simulated latency, validate the text, then
  /// look up the canned result for `query_id`.
  pub async fn run(&self, query_id: &str, text: &str) -> Result<TableResult, ExecuteError> {
    tokio::time::sleep(self.latency).await;
    validate(text)?;
    self.catalog.result_for(query_id).cloned().ok_or(ExecuteError::NoResultForQuery)
  }
}
