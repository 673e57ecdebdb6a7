//! Typed errors for the merge pipeline.
//!
//! Every failure the core can produce maps to one of these variants so the
//! calling layer can render a meaningful status message. The CLI converts to
//! `anyhow::Error` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported format '.{extension}' for {path} (expected .xlsx, .json or .txt)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("{0} contains no parseable rows")]
    EmptyOrUnreadable(PathBuf),

    #[error("failed reading {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The offending source is identified by a display label (a file path
    /// when known, else a positional label like "table 2").
    #[error("{0} has no 'ID' column to join on")]
    MissingKeyColumn(String),

    #[error("no files to merge")]
    NoFilesToMerge,

    #[error("output folder does not exist or is not a directory: {0}")]
    InvalidOutputFolder(PathBuf),

    #[error("failed writing {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
