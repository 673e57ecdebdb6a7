//! Record-oriented JSON loader.
//!
//! Expects a top-level array of flat objects. Column order is the order of
//! first appearance of each key across the records (serde_json is built with
//! `preserve_order` so object keys keep their file order).

use crate::error::{MergeError, Result};
use crate::table::{Table, Value};
use crate::utils::read_text_lossy;
use anyhow::anyhow;
use std::path::Path;

pub fn load(path: &Path) -> Result<Table> {
    let text = read_text_lossy(path)
        .map_err(|source| MergeError::Read { path: path.to_path_buf(), source })?;

    let parsed: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| MergeError::Read { path: path.to_path_buf(), source: e.into() })?;

    let records = parsed.as_array().ok_or_else(|| MergeError::Read {
        path: path.to_path_buf(),
        source: anyhow!("expected a top-level JSON array of records"),
    })?;

    if records.is_empty() {
        return Err(MergeError::EmptyOrUnreadable(path.to_path_buf()));
    }

    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        let object = record.as_object().ok_or_else(|| MergeError::Read {
            path: path.to_path_buf(),
            source: anyhow!("expected every array element to be an object, got: {record}"),
        })?;
        objects.push(object);
    }

    // Column order is the order of first appearance across all records.
    let mut headers: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(objects.len());
    for object in &objects {
        let mut row = Vec::with_capacity(headers.len());
        for header in &headers {
            row.push(convert(path, object.get(header))?);
        }
        rows.push(row);
    }

    Ok(Table::from_rows(headers, rows))
}

fn convert(path: &Path, value: Option<&serde_json::Value>) -> Result<Value> {
    let value = match value {
        None | Some(serde_json::Value::Null) => return Ok(Value::Null),
        Some(v) => v,
    };
    match value {
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(MergeError::Read {
            path: path.to_path_buf(),
            source: anyhow!("records must be flat, found nested value: {value}"),
        }),
        serde_json::Value::Null => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_and_load(content: &str) -> Result<Table> {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.json");
        fs::write(&path, content).expect("write");
        load(&path)
    }

    #[test]
    fn test_records_become_rows() {
        let table =
            write_and_load(r#"[{"ID":1,"Name":"X"},{"ID":2,"Name":"Y"}]"#).expect("load");
        assert_eq!(table.column_names(), vec!["ID", "Name"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0), vec![Value::Int(1), Value::Text("X".into())]);
    }

    #[test]
    fn test_missing_keys_fill_with_null() {
        let table =
            write_and_load(r#"[{"ID":1,"Name":"X"},{"ID":2,"Rating":88}]"#).expect("load");
        assert_eq!(table.column_names(), vec!["ID", "Name", "Rating"]);
        assert_eq!(table.row(0), vec![Value::Int(1), Value::Text("X".into()), Value::Null]);
        assert_eq!(table.row(1), vec![Value::Int(2), Value::Null, Value::Int(88)]);
    }

    #[test]
    fn test_empty_array_is_empty_or_unreadable() {
        let err = write_and_load("[]").unwrap_err();
        assert!(matches!(err, MergeError::EmptyOrUnreadable(_)));
    }

    #[test]
    fn test_non_array_is_read_error() {
        let err = write_and_load(r#"{"ID":1}"#).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }

    #[test]
    fn test_nested_value_is_read_error() {
        let err = write_and_load(r#"[{"ID":1,"Stats":{"pace":90}}]"#).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_read_error() {
        let err = write_and_load("[{").unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }
}
