//! `weft config init` — scaffold a default configuration file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use weft_config::{BuildConfig, config_to_json};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the file. Defaults to ./weft.config.json.
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Write the default record.
///
/// # Errors
///
/// Returns an error if the target exists (without `--force`) or cannot be
/// written.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from("weft.config.json"));
    write_default_config(&path, args.force)?;
    println!("{} Wrote {}", "\u{2713}".green(), path.display());
    Ok(())
}

/// Scaffold the default record at `path`.
///
/// Refuses to overwrite an existing file unless `force` is set — a config
/// already in place is someone's work, not scaffolding.
///
/// # Errors
///
/// Returns an error if `path` exists without `force`, or on write failure.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (pass --force to overwrite)", path.display());
    }
    let mut json = config_to_json(&BuildConfig::default())?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
