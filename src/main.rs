//! tablefuse: merge tabular data files on a shared ID column
//!
//! Thin binary shim; everything lives in the library so tests can drive the
//! pipeline directly.

use anyhow::Result;

fn main() -> Result<()> {
    tablefuse::cli::run()
}
