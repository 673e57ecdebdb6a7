//! Left-join fold over loaded tables.
//!
//! The first table is the accumulator; each subsequent table is left-joined
//! onto it keyed on the `ID` column. Join keys compare by canonical text so
//! `1`, `1.0` and `"1"` match across formats.
//!
//! Column collisions: a non-key column whose name already exists in the
//! accumulator gains a `_<n>` suffix, where `<n>` is the 1-based position of
//! the contributing table in the merge list; the suffix repeats until the
//! name is unique. Deterministic, and nothing is silently overwritten.

use crate::error::{MergeError, Result};
use crate::table::{Column, Table, Value, KEY_COLUMN};
use std::collections::HashMap;

/// Fold `tables` into one via repeated left joins on `ID`.
///
/// Inputs are never mutated; the result is a fresh [`Table`].
pub fn merge_tables(tables: &[Table]) -> Result<Table> {
    if tables.is_empty() {
        return Err(MergeError::NoFilesToMerge);
    }
    for (index, table) in tables.iter().enumerate() {
        if !table.has_column(KEY_COLUMN) {
            return Err(MergeError::MissingKeyColumn(format!("table {}", index + 1)));
        }
    }

    let mut merged = tables[0].clone();
    for (index, right) in tables.iter().enumerate().skip(1) {
        merged = left_join(&merged, right, index + 1);
    }

    tracing::debug!(
        sources = tables.len(),
        columns = merged.column_count(),
        rows = merged.row_count(),
        "merged tables"
    );
    Ok(merged)
}

/// Left join `right` onto `left`. `source_index` is the 1-based position of
/// `right` in the merge list, used for collision suffixes.
///
/// Every left row is preserved. Unmatched rows get nulls for the appended
/// columns; multiple matches fan out to one output row per match.
fn left_join(left: &Table, right: &Table, source_index: usize) -> Table {
    // Key -> right row indices, in row order so fan-out is stable.
    let mut right_rows_by_key: HashMap<String, Vec<usize>> = HashMap::new();
    if let Some(key_column) = right.column(KEY_COLUMN) {
        for (row_index, cell) in key_column.cells.iter().enumerate() {
            right_rows_by_key.entry(cell.to_text()).or_default().push(row_index);
        }
    }

    let appended_columns: Vec<&Column> =
        right.columns().iter().filter(|c| c.name != KEY_COLUMN).collect();

    let mut headers: Vec<String> =
        left.column_names().iter().map(|n| n.to_string()).collect();
    for column in &appended_columns {
        headers.push(disambiguate(&headers, &column.name, source_index));
    }

    let left_key = left.column(KEY_COLUMN).expect("caller verified key column");
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(left.row_count());
    for left_index in 0..left.row_count() {
        let key = left_key.cells[left_index].to_text();
        let left_cells = left.row(left_index);

        match right_rows_by_key.get(&key) {
            Some(matches) => {
                for &right_index in matches {
                    let mut row = left_cells.clone();
                    for column in &appended_columns {
                        row.push(column.cells[right_index].clone());
                    }
                    rows.push(row);
                }
            }
            None => {
                let mut row = left_cells;
                row.extend(appended_columns.iter().map(|_| Value::Null));
                rows.push(row);
            }
        }
    }

    Table::from_rows(headers, rows)
}

/// Suffix `name` with `_<source_index>` until it collides with nothing in
/// `taken`. Each round lengthens the candidate, so this terminates.
fn disambiguate(taken: &[String], name: &str, source_index: usize) -> String {
    let mut candidate = name.to_string();
    while taken.iter().any(|t| t == &candidate) {
        candidate = format!("{candidate}_{source_index}");
    }
    candidate
}
