//! Column-oriented table model shared by the loader, merge engine and writers.
//!
//! A [`Table`] is an ordered list of named columns; rows are the implicit
//! positional tuples across them. Cells are loosely typed [`Value`]s because
//! the three input formats disagree about types: JSON has real numbers and
//! nulls, spreadsheets have floats, pipe-delimited text has only strings.

use serde_json::Number;

/// Name of the join-key column every mergeable table must carry.
pub const KEY_COLUMN: &str = "ID";

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Canonical textual rendering, used for the `.txt` writer, previews and
    /// join-key comparison. Floats with no fractional part render in integer
    /// form so `1`, `1.0` and `"1"` agree across formats.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            Value::Text(s) => s.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// JSON rendering for the record-oriented writer.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column { name: name.into(), cells: Vec::new() }
    }
}

/// An in-memory table. Columns are kept in insertion order; all columns hold
/// the same number of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from header names and row tuples. Short rows are padded
    /// with nulls, long rows truncated, so the table stays rectangular.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let mut columns: Vec<Column> = headers.into_iter().map(Column::new).collect();
        for row in rows {
            for (idx, column) in columns.iter_mut().enumerate() {
                column.cells.push(row.get(idx).cloned().unwrap_or(Value::Null));
            }
        }
        Table { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// One row as an owned tuple of cells.
    pub fn row(&self, index: usize) -> Vec<Value> {
        self.columns
            .iter()
            .map(|c| c.cells.get(index).cloned().unwrap_or(Value::Null))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.row_count()).map(move |i| self.row(i))
    }
}
