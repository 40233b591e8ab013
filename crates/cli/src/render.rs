//! Text output for record counts.

use std::fmt::Write;

use anyhow::Result;
use sobject_counts_core::constants::{COUNT_COLUMN_LABEL, NAME_COLUMN_LABEL};
use sobject_counts_core::RecordCount;

/// Two-column table: object name, then count. Columns are padded to the
/// widest cell; every line ends with a newline.
pub(crate) fn render_table(counts: &[RecordCount]) -> String {
    let rows: Vec<(&str, String)> =
        counts.iter().map(|rc| (rc.name.as_str(), rc.count.to_string())).collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(NAME_COLUMN_LABEL.len()))
        .max()
        .unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.len())
        .chain(std::iter::once(COUNT_COLUMN_LABEL.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{NAME_COLUMN_LABEL:<name_width$}  {COUNT_COLUMN_LABEL}");
    let _ = writeln!(out, "{}  {}", "-".repeat(name_width), "-".repeat(count_width));
    for (name, count) in &rows {
        let _ = writeln!(out, "{name:<name_width$}  {count}");
    }
    out
}

/// JSON envelope with the counts under `result`.
pub(crate) fn render_json(counts: &[RecordCount]) -> Result<String> {
    let envelope = serde_json::json!({ "status": 0, "result": counts });
    Ok(serde_json::to_string_pretty(&envelope)?)
}
