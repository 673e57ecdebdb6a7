//! Record-oriented JSON writer.
//!
//! One object per row, keys in column order (serde_json's `preserve_order`
//! keeps them that way), pretty-printed with 2-space indentation. Non-ASCII
//! characters are emitted literally, not `\u`-escaped, which is serde_json's
//! default.

use crate::error::{MergeError, Result};
use crate::table::Table;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;

pub fn write(table: &Table, path: &Path) -> Result<()> {
    let records: Vec<JsonValue> = table
        .rows()
        .map(|row| {
            let mut object = Map::new();
            for (column, cell) in table.columns().iter().zip(row.iter()) {
                object.insert(column.name.clone(), cell.to_json());
            }
            JsonValue::Object(object)
        })
        .collect();

    let rendered = serde_json::to_string_pretty(&records)
        .map_err(|e| MergeError::Write { path: path.to_path_buf(), source: e.into() })?;
    fs::write(path, rendered)
        .map_err(|e| MergeError::Write { path: path.to_path_buf(), source: e.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_records_with_nulls_and_literal_unicode() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out.json");
        let table = Table::from_rows(
            vec!["ID".into(), "Name".into(), "Rating".into()],
            vec![
                vec![Value::Int(1), Value::Text("Özil".into()), Value::Int(88)],
                vec![Value::Int(2), Value::Text("Y".into()), Value::Null],
            ],
        );
        write(&table, &path).expect("write");

        let text = fs::read_to_string(&path).expect("read");
        assert!(text.contains("Özil"), "non-ASCII must not be escaped: {text}");
        assert!(text.contains("  \"ID\": 1"), "2-space indent expected: {text}");
        assert!(text.contains("\"Rating\": null"));

        let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_written_json_loads_back() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out.json");
        let table = Table::from_rows(
            vec!["ID".into(), "Name".into()],
            vec![vec![Value::Int(1), Value::Text("X".into())]],
        );
        write(&table, &path).expect("write");

        let loaded = crate::load::json::load(&path).expect("load");
        assert_eq!(loaded, table);
    }
}
