//! # weft-config
//!
//! Build configuration model and checker for the Weft utility CSS generator.
//!
//! The generator consumes a single declarative record from a well-known file
//! (`weft.config.json` / `.yaml` / `.yml`): glob patterns naming the template
//! files it scans for class usage, plus additive design-token overrides
//! (`theme.extend.fontFamily`). This crate owns that record on the Rust side —
//! the typed model with the shipped defaults, loading, structural checking,
//! and report output. Scanning template contents, CSS emission, purging and
//! font resolution live in the generator, not here.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use weft_config::{CheckOptions, check_dir};
//!
//! let mut options = CheckOptions::default();
//! options.strict = true;
//!
//! let report = check_dir(Path::new("."), &options).unwrap();
//! println!("Patterns checked: {}", report.checked_patterns);
//! println!("Errors: {}", report.errors_count());
//! println!("OK: {}", report.ok);
//! ```

mod check;
mod config;
mod error;
mod format;
pub mod output;
mod report;
mod source;

pub use check::{SKIP_DIRS, check_config};
pub use config::{
    BuildConfig, CheckOptions, FontFamilyMap, GENERIC_FAMILIES, Theme, ThemeExtend,
    WELL_KNOWN_NAMES,
};
pub use error::{Finding, LoadError, Severity};
pub use format::json::config_to_json;
pub use report::CheckReport;
pub use source::{MAX_CONFIG_BYTES, load_config, resolve_config_path};

use std::path::Path;

/// Load the configuration file at `path` and check it.
///
/// This is the primary public API.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed ([`LoadError`]).
/// Structural problems inside a successfully loaded record are reported as
/// findings in the returned report, never as `Err`.
pub fn check_file(path: &Path, options: &CheckOptions) -> anyhow::Result<CheckReport> {
    let config = source::load_config(path)?;
    Ok(report_for(&config, path, options))
}

/// Resolve the well-known configuration file in `dir`, then load and check it.
///
/// # Errors
///
/// Returns an error if no well-known file exists in `dir` or if the resolved
/// file cannot be read or parsed.
pub fn check_dir(dir: &Path, options: &CheckOptions) -> anyhow::Result<CheckReport> {
    let path = source::resolve_config_path(dir)?;
    check_file(&path, options)
}

/// Build a report for an already-loaded record.
///
/// `path` attributes findings to the file the record came from.
#[must_use]
pub fn report_for(config: &BuildConfig, path: &Path, options: &CheckOptions) -> CheckReport {
    let findings = check::check_config(config, path, options);
    let ok = findings.iter().all(|f| f.severity != Severity::Error);
    CheckReport {
        config_path: path.to_owned(),
        checked_patterns: config.content.len(),
        checked_stacks: config.theme.extend.font_family.len(),
        ok,
        findings,
    }
}
