//! Pipe-delimited text writer.
//!
//! Header and rows are joined with `" | "`, the same convention the text
//! loader splits and trims on, so written files load back unchanged.

use crate::error::{MergeError, Result};
use crate::table::Table;
use std::fs;
use std::path::Path;

pub const SEPARATOR: &str = " | ";

pub fn write(table: &Table, path: &Path) -> Result<()> {
    fs::write(path, render(table))
        .map_err(|e| MergeError::Write { path: path.to_path_buf(), source: e.into() })
}

/// Render the whole table, also used for CLI previews.
pub fn render(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.row_count() + 1);
    lines.push(table.column_names().join(SEPARATOR));
    for row in table.rows() {
        lines.push(row.iter().map(|v| v.to_text()).collect::<Vec<_>>().join(SEPARATOR));
    }
    format!("{}\n", lines.join("\n"))
}
