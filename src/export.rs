use serde_json::Value;

use crate::catalog::TableResult;

/// Renders a result set in the playground's CSV dialect: the header line is
/// the raw column names joined by commas, and every cell is JSON-stringified.
/// Not RFC 4180: a string value containing a comma still splits the line.
pub fn result_to_csv(result: &TableResult) -> String {
  let mut lines = Vec::with_capacity(result.rows.len() + 1);
  lines.push(result.columns.join(","));
  for row in &result.rows {
    let cells: Vec<String> = result
      .columns
      .iter()
      .map(|column| {
        let value = row.get(column).unwrap_or(&Value::Null);
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
      })
      .collect();
    lines.push(cells.join(","));
  }
  lines.join("\n")
}
