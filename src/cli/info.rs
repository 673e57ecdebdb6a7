//! Info command implementation.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::load::load_table;
use crate::table::{Table, KEY_COLUMN};
use crate::write::txt;

#[derive(Args)]
pub struct InfoArgs {
    /// File to inspect (.xlsx, .json or .txt)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Preview at most this many rows
    #[arg(long, default_value_t = 5, value_name = "ROWS")]
    pub limit: usize,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let table = load_table(&args.file)?;

    println!("File: {}", args.file.display());
    println!("Columns ({}): {}", table.column_count(), table.column_names().join(", "));
    println!("Rows: {}", table.row_count());
    println!(
        "ID column: {}",
        if table.has_column(KEY_COLUMN) { "present" } else { "MISSING (cannot be merged)" }
    );

    let preview = Table::from_rows(
        table.column_names().iter().map(|n| n.to_string()).collect(),
        table.rows().take(args.limit).collect(),
    );
    print!("{}", txt::render(&preview));
    if table.row_count() > args.limit {
        println!("... {} more rows", table.row_count() - args.limit);
    }

    Ok(())
}
