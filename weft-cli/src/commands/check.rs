//! `weft config check` — load a configuration file and check it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use weft_config::{CheckOptions, CheckReport, output, resolve_config_path};

use crate::commands::OutputFormat;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Configuration file to check. Defaults to the well-known name
    /// (weft.config.json / .yaml / .yml) in the current directory.
    pub path: Option<PathBuf>,

    /// Report output format.
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Skip the template walk (no zero-match warnings).
    #[arg(long)]
    pub no_scan: bool,

    /// Base directory content patterns are resolved against.
    /// Defaults to the configuration file's directory.
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

/// Run the check and print the report.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, or — after the
/// report has been printed — if the check found structural errors, so the
/// shell sees a non-zero exit.
pub fn run(args: &CheckArgs) -> Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => resolve_config_path(Path::new("."))?,
    };
    tracing::debug!(path = %path.display(), "checking configuration");

    let mut options = CheckOptions::default();
    options.strict = args.strict;
    options.scan_templates = !args.no_scan;
    options.base_dir = args.base_dir.clone();

    let report = weft_config::check_file(&path, &options)?;
    write_report(&report, args.format)?;

    if report.ok {
        Ok(())
    } else {
        let summary = format!(
            "configuration check failed: {} error(s)",
            report.errors_count()
        );
        anyhow::bail!("{}", summary.red())
    }
}

fn write_report(report: &CheckReport, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout();
    match format {
        OutputFormat::Human => output::write_human(report, &mut stdout),
        OutputFormat::Json => output::write_json(report, &mut stdout),
    }
}
