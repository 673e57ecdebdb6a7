//! Pipe-delimited text loader.
//!
//! First non-blank line is the header; every field is split on `|` and
//! trimmed, matching the `" | "` convention the writer emits so files
//! round-trip. Empty cells load as null.

use crate::error::{MergeError, Result};
use crate::table::{Table, Value};
use crate::utils::read_text_lossy;
use std::path::Path;

pub const SEPARATOR: char = '|';

pub fn load(path: &Path) -> Result<Table> {
    let text = read_text_lossy(path)
        .map_err(|source| MergeError::Read { path: path.to_path_buf(), source })?;

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(MergeError::EmptyOrUnreadable(path.to_path_buf()));
    };
    let headers: Vec<String> =
        header_line.split(SEPARATOR).map(|h| h.trim().to_string()).collect();

    let rows: Vec<Vec<Value>> = lines
        .map(|line| line.split(SEPARATOR).map(parse_cell).collect())
        .collect();

    Ok(Table::from_rows(headers, rows))
}

fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::Text(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_and_load(content: &str) -> Result<Table> {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.txt");
        fs::write(&path, content).expect("write");
        load(&path)
    }

    #[test]
    fn test_header_and_rows_are_trimmed() {
        let table = write_and_load("ID | Name | Club\n1 | X | FCB\n2 | Y | BVB\n").expect("load");
        assert_eq!(table.column_names(), vec!["ID", "Name", "Club"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.row(0),
            vec![Value::Text("1".into()), Value::Text("X".into()), Value::Text("FCB".into())]
        );
    }

    #[test]
    fn test_empty_cell_loads_as_null() {
        let table = write_and_load("ID|Name\n1|\n").expect("load");
        assert_eq!(table.row(0), vec![Value::Text("1".into()), Value::Null]);
    }

    #[test]
    fn test_header_only_file_yields_zero_rows() {
        let table = write_and_load("ID|Name\n").expect("load");
        assert_eq!(table.column_names(), vec!["ID", "Name"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = write_and_load("ID|Name\n\n1|X\n\n").expect("load");
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_completely_empty_is_error() {
        let err = write_and_load("").unwrap_err();
        assert!(matches!(err, MergeError::EmptyOrUnreadable(_)));
    }
}
