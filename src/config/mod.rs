//! Config file discovery and parsing.
//!
//! An explicitly-passed config that fails to parse is an error; an
//! auto-discovered one that fails to parse logs a warning and falls back to
//! defaults, so a stray broken file in the working directory never blocks a
//! merge.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default destination for `save` when the CLI gets no `--out`.
    pub output_dir: Option<PathBuf>,

    /// Prefix tokens stripped from the first file's stem when deriving the
    /// output basename.
    pub strip_prefixes: Vec<String>,

    /// Optional cap on how many sources the CLI accepts per merge. The
    /// registry itself stays unbounded.
    pub max_sources: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: None,
            strip_prefixes: vec!["Data".to_string()],
            max_sources: None,
        }
    }
}

pub fn load_config(working_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(working_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    match parse_toml_config(&content, &config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if config_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested `[tablefuse]` section so the file
/// can live inside a larger tool config.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("tablefuse") {
        nested.clone()
    } else {
        raw
    };

    config_val
        .try_into()
        .with_context(|| format!("Invalid config: {}", config_file.display()))
}

fn discover_config(working_dir: &Path) -> Option<PathBuf> {
    let candidates = ["tablefuse.toml", ".tablefuse.toml"];

    for candidate in candidates {
        let path = working_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
