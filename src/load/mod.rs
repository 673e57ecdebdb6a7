//! Format detection and table loading.
//!
//! Dispatch is by file extension, matched case-insensitively. Each format
//! submodule parses into the shared [`Table`] model; this module owns the
//! existence check, the extension check, and the empty-table check so the
//! submodules stay purely about parsing.

use crate::error::{MergeError, Result};
use crate::table::Table;
use std::path::Path;

pub mod json;
pub mod txt;
pub mod xlsx;

/// Parse one input file into a [`Table`].
///
/// Errors: `NotFound` for a missing path, `UnsupportedFormat` for an unknown
/// extension, `EmptyOrUnreadable` when the file yields neither columns nor
/// rows, `Read` for any other parse failure.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(MergeError::NotFound(path.to_path_buf()));
    }

    let extension =
        path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let table = match extension.as_str() {
        "xlsx" => xlsx::load(path)?,
        "json" => json::load(path)?,
        "txt" => txt::load(path)?,
        _ => {
            return Err(MergeError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            })
        }
    };

    if table.column_count() == 0 {
        return Err(MergeError::EmptyOrUnreadable(path.to_path_buf()));
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_table(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, MergeError::NotFound(_)));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.csv");
        fs::write(&path, "ID,Name\n1,X\n").expect("write");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, MergeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.TXT");
        fs::write(&path, "ID|Name\n1|X\n").expect("write");
        let table = load_table(&path).expect("load");
        assert_eq!(table.column_names(), vec!["ID", "Name"]);
    }

    #[test]
    fn test_empty_file_is_empty_or_unreadable() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("data.txt");
        fs::write(&path, "").expect("write");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, MergeError::EmptyOrUnreadable(_)));
    }
}
