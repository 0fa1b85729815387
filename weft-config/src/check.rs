//! Structural checks over a loaded configuration record.
//!
//! Implements the record's documented invariants as findings: content
//! patterns must be non-empty parseable globs, every font role needs a
//! non-empty fallback chain, and chains conventionally end with a CSS
//! generic family. Optionally counts how many template files each content
//! pattern matches — a pattern matching nothing is the most common way a
//! build silently produces empty CSS.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{BuildConfig, CheckOptions, GENERIC_FAMILIES};
use crate::error::{Finding, Severity};

/// Directories never visited by the template walk.
pub const SKIP_DIRS: &[&str] = &["target", "node_modules", ".git", "vendor"];

/// Check a configuration record and return all findings, in record order.
///
/// `file` is the path the record was loaded from (used for finding
/// attribution and as the default base directory of the template walk).
/// Load failures are not findings — a record must exist before it can be
/// checked.
#[must_use]
pub fn check_config(config: &BuildConfig, file: &Path, options: &CheckOptions) -> Vec<Finding> {
    let mut findings = Vec::new();

    let patterns = check_content(config, file, &mut findings);
    check_font_family(config, file, &mut findings);

    if options.scan_templates {
        check_template_matches(config, file, &patterns, options, &mut findings);
    }

    if options.strict {
        for finding in &mut findings {
            finding.severity = Severity::Error;
        }
    }

    tracing::debug!(
        findings = findings.len(),
        patterns = config.content.len(),
        font_roles = config.theme.extend.font_family.len(),
        "checked configuration"
    );
    findings
}

/// Validate content entries and compile them for the template walk.
/// Entries that fail produce a finding and a `None` slot.
fn check_content(
    config: &BuildConfig,
    file: &Path,
    findings: &mut Vec<Finding>,
) -> Vec<Option<Pattern>> {
    if config.content.is_empty() {
        findings.push(Finding {
            file: file.to_owned(),
            json_path: "$.content".to_owned(),
            value: String::new(),
            message: "content is empty; the generator would scan no templates".to_owned(),
            severity: Severity::Error,
        });
    }

    let mut patterns = Vec::with_capacity(config.content.len());
    for (i, entry) in config.content.iter().enumerate() {
        let json_path = format!("$.content[{i}]");
        if entry.trim().is_empty() {
            findings.push(Finding {
                file: file.to_owned(),
                json_path,
                value: String::new(),
                message: "content entry is empty".to_owned(),
                severity: Severity::Error,
            });
            patterns.push(None);
            continue;
        }
        match Pattern::new(normalize_pattern(entry)) {
            Ok(pattern) => patterns.push(Some(pattern)),
            Err(e) => {
                findings.push(Finding {
                    file: file.to_owned(),
                    json_path,
                    value: entry.clone(),
                    message: format!("invalid glob pattern: {e}"),
                    severity: Severity::Error,
                });
                patterns.push(None);
            }
        }
    }
    patterns
}

/// Validate font roles and fallback chains.
fn check_font_family(config: &BuildConfig, file: &Path, findings: &mut Vec<Finding>) {
    for (role, chain) in &config.theme.extend.font_family {
        let json_path = format!("$.theme.extend.fontFamily.{role}");

        if role.trim().is_empty() {
            findings.push(Finding {
                file: file.to_owned(),
                json_path: "$.theme.extend.fontFamily".to_owned(),
                value: String::new(),
                message: "font role name is empty".to_owned(),
                severity: Severity::Error,
            });
        }

        if chain.is_empty() {
            findings.push(Finding {
                file: file.to_owned(),
                json_path,
                value: String::new(),
                message: "fallback chain is empty; at least one font family is required"
                    .to_owned(),
                severity: Severity::Error,
            });
            continue;
        }

        for (i, family) in chain.iter().enumerate() {
            if family.trim().is_empty() {
                findings.push(Finding {
                    file: file.to_owned(),
                    json_path: format!("{json_path}[{i}]"),
                    value: String::new(),
                    message: "font family name is empty".to_owned(),
                    severity: Severity::Error,
                });
            }
        }

        // chain is non-empty here
        if let Some(last) = chain.last()
            && !GENERIC_FAMILIES.contains(&last.as_str())
        {
            findings.push(Finding {
                file: file.to_owned(),
                json_path,
                value: last.clone(),
                message: format!(
                    "fallback chain does not end with a generic family (expected one of: {})",
                    GENERIC_FAMILIES.join(", ")
                ),
                severity: Severity::Warning,
            });
        }
    }
}

/// Warn on content patterns that match no files under the base directory.
fn check_template_matches(
    config: &BuildConfig,
    file: &Path,
    patterns: &[Option<Pattern>],
    options: &CheckOptions,
    findings: &mut Vec<Finding>,
) {
    let base = options
        .base_dir
        .clone()
        .or_else(|| file.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let counts = count_template_matches(&base, patterns, options);

    for ((i, entry), count) in config.content.iter().enumerate().zip(&counts) {
        if patterns[i].is_some() && *count == 0 {
            findings.push(Finding {
                file: file.to_owned(),
                json_path: format!("$.content[{i}]"),
                value: entry.clone(),
                message: format!("pattern matches no files under {}", base.display()),
                severity: Severity::Warning,
            });
        }
    }
}

/// Strip the leading `./` the on-disk convention uses; compiled patterns are
/// matched against paths relative to the base directory.
fn normalize_pattern(entry: &str) -> &str {
    entry.strip_prefix("./").unwrap_or(entry)
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Count files under `base` matched by each compiled content pattern.
///
/// Matching is against `./`-free paths relative to `base`. Only the
/// directory tree is inspected; file contents are never read — class
/// extraction is the generator's job. The count is best-effort: unreadable
/// subtrees are logged and skipped.
fn count_template_matches(
    base: &Path,
    patterns: &[Option<Pattern>],
    options: &CheckOptions,
) -> Vec<usize> {
    let mut counts = vec![0_usize; patterns.len()];
    let mut visited = 0_usize;

    for entry_result in WalkDir::new(base)
        .max_depth(options.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                tracing::debug!(error = %walk_err, "template walk error; subtree skipped");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        visited += 1;
        if visited > options.max_files {
            tracing::warn!(
                max_files = options.max_files,
                "template walk truncated; match counts are partial"
            );
            break;
        }

        let Ok(rel) = entry.path().strip_prefix(base) else {
            continue;
        };
        let rel_str = rel.to_string_lossy();
        for (pattern, count) in patterns.iter().zip(counts.iter_mut()) {
            if let Some(pattern) = pattern
                && pattern.matches(&rel_str)
            {
                *count += 1;
            }
        }
    }

    counts
}
