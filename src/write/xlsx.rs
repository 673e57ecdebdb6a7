//! Spreadsheet writer.
//!
//! One worksheet, header row followed by data rows. Null cells are left
//! blank, numbers are written as numbers so downstream tooling can sum them.

use crate::error::{MergeError, Result};
use crate::table::{Table, Value};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub fn write(table: &Table, path: &Path) -> Result<()> {
    write_impl(table, path)
        .map_err(|source| MergeError::Write { path: path.to_path_buf(), source })
}

fn write_impl(table: &Table, path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, column) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, &column.name)?;
    }

    for (row_index, row) in table.rows().enumerate() {
        let row_number = (row_index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Value::Null => {}
                Value::Bool(b) => {
                    worksheet.write_boolean(row_number, col, *b)?;
                }
                Value::Int(i) => {
                    worksheet.write_number(row_number, col, *i as f64)?;
                }
                Value::Float(f) => {
                    worksheet.write_number(row_number, col, *f)?;
                }
                Value::Text(s) => {
                    worksheet.write_string(row_number, col, s)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
