//! Session state: the ordered source registry and output naming.
//!
//! The registry owns everything mutable in a session. Mutation goes through
//! `&mut self` (`add_file`, `reset`) while merging and saving take `&self`,
//! so the borrow checker enforces the required discipline: nobody can add or
//! reset sources while a merge-and-save borrow is alive.

use crate::error::{MergeError, Result};
use crate::load::load_table;
use crate::merge::merge_tables;
use crate::table::{Table, KEY_COLUMN};
use crate::write;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// A successfully loaded source file.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub table: Table,
}

/// Ordered list of sources for the current session.
///
/// The registry itself is unbounded; any cap on the number of sources is the
/// calling layer's business.
#[derive(Debug)]
pub struct SourceRegistry {
    entries: Vec<SourceEntry>,
    basename: Option<String>,
    strip_prefixes: Vec<String>,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::with_strip_prefixes(vec!["Data".to_string()])
    }

    /// A registry that strips any of `prefixes` (case-insensitive, followed
    /// by `_`) from the first file's stem when deriving the output basename.
    pub fn with_strip_prefixes(prefixes: Vec<String>) -> Self {
        SourceRegistry { entries: Vec::new(), basename: None, strip_prefixes: prefixes }
    }

    /// Load `path`, verify it has an `ID` column, and append it.
    ///
    /// A failed add leaves the registry exactly as it was. The first
    /// successful add seeds the output basename.
    pub fn add_file(&mut self, path: &Path) -> Result<&SourceEntry> {
        let table = load_table(path)?;
        if !table.has_column(KEY_COLUMN) {
            return Err(MergeError::MissingKeyColumn(path.display().to_string()));
        }

        if self.basename.is_none() {
            self.basename = Some(derive_basename(path, &self.strip_prefixes));
        }
        self.entries.push(SourceEntry { path: path.to_path_buf(), table });
        tracing::info!(path = %path.display(), sources = self.entries.len(), "added source");
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Drop all sources and the derived basename. Idempotent.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.basename = None;
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Basename derived from the first added file, if any.
    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    /// Fold all sources into one table. Pure: recomputed on every call.
    pub fn merge_all(&self) -> Result<Table> {
        let tables: Vec<Table> = self.entries.iter().map(|e| e.table.clone()).collect();
        merge_tables(&tables)
    }

    /// Merge and write all three output formats under `dir`, stamped with
    /// today's date.
    pub fn save(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.save_on(dir, Local::now().date_naive())
    }

    /// Like [`save`](Self::save) with an explicit date, for deterministic
    /// callers and tests.
    pub fn save_on(&self, dir: &Path, date: NaiveDate) -> Result<Vec<PathBuf>> {
        let merged = self.merge_all()?;
        let basename = self.basename.as_deref().unwrap_or("merged");
        write::save_all(&merged, dir, &stamped_basename(basename, date))
    }
}

/// `Data_<basename>_<YYYYMMDD>`, the shared stem of the three output files.
pub fn stamped_basename(basename: &str, date: NaiveDate) -> String {
    format!("Data_{basename}_{}", date.format("%Y%m%d"))
}

/// Output basename from a source file name: the stem, minus a recognized
/// `<prefix>_` token so `Data_squad.json` contributes `squad`, not
/// `Data_squad` (which would double up in the stamped output name).
fn derive_basename(path: &Path, strip_prefixes: &[String]) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("merged");
    if let Some((first, rest)) = stem.split_once('_') {
        if !rest.is_empty()
            && strip_prefixes.iter().any(|p| p.eq_ignore_ascii_case(first))
        {
            return rest.to_string();
        }
    }
    stem.to_string()
}
