use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{catalog::TableResult, components::ComponentKind, executor::ExecuteError};

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
  Tick,
  Render,
  Resize(u16, u16),
  Suspend,
  Resume,
  Quit,
  Refresh,
  Error(String),
  Help,
  SelectComponent(ComponentKind),
  FocusCatalog,
  FocusEditor,
  FocusResults,
  CatalogMoveUp,
  CatalogMoveDown,
  LoadSelectedQuery,
  ToggleHistoryTab,
  ExecuteQuery,
  RunQuery { generation: u64, query_id: String, text: String },
  QueryFinished { generation: u64, outcome: Result<TableResult, ExecuteError> },
  ToggleTheme,
  CopyQuery,
  ExportResultsToCsv,
  ClearQuery,
  RowMoveUp,
  RowMoveDown,
  RowPageUp,
  RowPageDown,
  RowJumpToTop,
  RowJumpToBottom,
  ScrollTableLeft,
  ScrollTableRight,
}
