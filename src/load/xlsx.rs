//! Spreadsheet loader.
//!
//! Reads the first worksheet; the first row supplies column names.

use crate::error::{MergeError, Result};
use crate::table::{Table, Value};
use calamine::{open_workbook, DataType, Reader, Xlsx, XlsxError};
use std::path::Path;

pub fn load(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: XlsxError| {
        MergeError::Read { path: path.to_path_buf(), source: e.into() }
    })?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(MergeError::EmptyOrUnreadable(path.to_path_buf()));
    };

    // The sheet name comes from the workbook itself, so a worksheet-not-found
    // error here means a malformed archive, not an empty one: map it to Read.
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| MergeError::Read { path: path.to_path_buf(), source: e.into() })?;

    let mut cell_rows = range.rows();
    let Some(header_row) = cell_rows.next() else {
        return Err(MergeError::EmptyOrUnreadable(path.to_path_buf()));
    };

    let headers: Vec<String> =
        header_row.iter().map(|c| convert(c).to_text().trim().to_string()).collect();

    let rows: Vec<Vec<Value>> =
        cell_rows.map(|row| row.iter().map(convert).collect()).collect();

    Ok(Table::from_rows(headers, rows))
}

fn convert(cell: &DataType) -> Value {
    match cell {
        DataType::Empty => Value::Null,
        DataType::String(s) => Value::Text(s.clone()),
        DataType::Int(i) => Value::Int(*i),
        DataType::Float(f) => Value::Float(*f),
        DataType::Bool(b) => Value::Bool(*b),
        // Serial dates, durations and cell errors keep their display form.
        other => Value::Text(other.to_string()),
    }
}
