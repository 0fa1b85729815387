//! `weft config print` — emit the resolved configuration as pretty JSON.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use weft_config::{BuildConfig, config_to_json, load_config, resolve_config_path};

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Configuration file to print. Defaults to the well-known name in the
    /// current directory.
    pub path: Option<PathBuf>,

    /// Print the built-in default record instead of loading a file.
    #[arg(long)]
    pub defaults: bool,
}

/// Resolve, load and print.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved, read or parsed.
pub fn run(args: &PrintArgs) -> Result<()> {
    let config = if args.defaults {
        BuildConfig::default()
    } else {
        let path = match &args.path {
            Some(path) => path.clone(),
            None => resolve_config_path(Path::new("."))?,
        };
        load_config(&path)?
    };

    println!("{}", config_to_json(&config)?);
    Ok(())
}
