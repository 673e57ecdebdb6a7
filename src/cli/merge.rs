//! Merge command implementation.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_config;
use crate::session::SourceRegistry;
use crate::table::Table;
use crate::write::txt;

#[derive(Args)]
pub struct MergeArgs {
    /// Input files (.xlsx, .json or .txt), joined left-to-right on ID
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Destination directory for the three output files; preview-only if
    /// neither this nor a configured output_dir is set
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Preview at most this many rows
    #[arg(long, default_value_t = 10, value_name = "ROWS")]
    pub limit: usize,

    /// Config file path (default: ./tablefuse.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = load_config(&working_dir, args.config.as_deref())?;

    if let Some(cap) = config.max_sources {
        if args.files.len() > cap {
            anyhow::bail!("too many input files: {} given, configured cap is {}", args.files.len(), cap);
        }
    }

    let mut registry = SourceRegistry::with_strip_prefixes(config.strip_prefixes.clone());
    for file in &args.files {
        let entry = registry.add_file(file)?;
        println!(
            "Added {} ({} columns, {} rows)",
            file.display(),
            entry.table.column_count(),
            entry.table.row_count()
        );
    }

    let merged = registry.merge_all()?;
    println!(
        "Merged {} file(s): {} columns, {} rows",
        registry.len(),
        merged.column_count(),
        merged.row_count()
    );
    print!("{}", txt::render(&preview(&merged, args.limit)));
    if merged.row_count() > args.limit {
        println!("... {} more rows", merged.row_count() - args.limit);
    }

    let destination = args.out.or_else(|| config.output_dir.clone());
    match destination {
        Some(dir) => {
            let written = registry.save(&dir)?;
            println!("Outputs:");
            for path in written {
                println!("  {}", path.display());
            }
        }
        None => println!("No output directory given, preview only (use --out to save)"),
    }

    Ok(())
}

/// First `limit` rows of `table`, headers included.
fn preview(table: &Table, limit: usize) -> Table {
    Table::from_rows(
        table.column_names().iter().map(|n| n.to_string()).collect(),
        table.rows().take(limit).collect(),
    )
}
