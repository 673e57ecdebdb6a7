//! Output rendering in all three formats.
//!
//! The destination directory is checked before anything is created, so an
//! invalid folder produces zero files. Once writing starts there is no
//! cross-file atomicity: if the third write fails the first two stay on disk.

use crate::error::{MergeError, Result};
use crate::table::Table;
use std::path::{Path, PathBuf};

pub mod json;
pub mod txt;
pub mod xlsx;

pub const OUTPUT_EXTENSIONS: [&str; 3] = ["xlsx", "json", "txt"];

/// Write `table` as `<basename>.xlsx`, `<basename>.json` and `<basename>.txt`
/// under `dir`, returning the paths in that order. Existing files are
/// overwritten.
pub fn save_all(table: &Table, dir: &Path, basename: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MergeError::InvalidOutputFolder(dir.to_path_buf()));
    }

    let mut written = Vec::with_capacity(OUTPUT_EXTENSIONS.len());
    for extension in OUTPUT_EXTENSIONS {
        let path = dir.join(format!("{basename}.{extension}"));
        match extension {
            "xlsx" => xlsx::write(table, &path)?,
            "json" => json::write(table, &path)?,
            _ => txt::write(table, &path)?,
        }
        tracing::info!(path = %path.display(), "wrote output");
        written.push(path);
    }
    Ok(written)
}
