//! tablefuse: merge tabular data files on a shared ID column.
//!
//! The pipeline has three operations: [`load::load_table`] parses `.xlsx`,
//! `.json` or `|`-delimited `.txt` files into a [`table::Table`];
//! [`merge::merge_tables`] folds them with repeated left joins keyed on the
//! `ID` column; [`write::save_all`] renders the result back out in all three
//! formats. [`session::SourceRegistry`] holds the per-session file list and
//! derives the date-stamped output basename.

pub mod cli;
pub mod config;
pub mod error;
pub mod load;
pub mod merge;
pub mod session;
pub mod table;
pub mod utils;
pub mod write;

pub use error::{MergeError, Result};
pub use session::SourceRegistry;
pub use table::{Table, Value};
