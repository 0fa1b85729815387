//! Shared output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.
//! Color/terminal formatting is intentionally excluded from this core module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  WEFT CONFIGURATION CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Config file:      {}", report.config_path.display())?;
    writeln!(writer, "  Patterns checked: {}", report.checked_patterns)?;
    writeln!(writer, "  Stacks checked:   {}", report.checked_stacks)?;
    writeln!(writer, "  Errors:           {}", report.errors_count())?;
    writeln!(writer, "  Warnings:         {}", report.warnings_count())?;
    writeln!(writer)?;

    if !report.findings.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FINDINGS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for finding in &report.findings {
            writeln!(writer, "{}", finding.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok && report.findings.is_empty() {
        writeln!(
            writer,
            "\u{2713} Configuration OK ({} pattern(s), {} font stack(s))",
            report.checked_patterns, report.checked_stacks
        )?;
    } else if report.ok {
        writeln!(
            writer,
            "\u{2713} Configuration OK with {} warning(s)",
            report.warnings_count()
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} structural error(s) found",
            report.errors_count()
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;

        let has_glob_error = report
            .findings
            .iter()
            .any(|f| f.message.contains("glob pattern"));
        let has_chain_error = report
            .findings
            .iter()
            .any(|f| f.message.contains("chain is empty") || f.message.contains("family name"));
        let has_content_error = report
            .findings
            .iter()
            .any(|f| f.message.contains("content"));

        if has_content_error {
            writeln!(
                writer,
                "    - content must list at least one non-empty glob pattern"
            )?;
        }
        if has_glob_error {
            writeln!(
                writer,
                "    - Glob patterns use * / ** / ? and [..] character classes"
            )?;
        }
        if has_chain_error {
            writeln!(
                writer,
                "    - Every fontFamily role needs at least one non-empty family name"
            )?;
            writeln!(
                writer,
                "    - End each chain with a generic family (serif, sans-serif, ...)"
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::error::{Finding, Severity};

    fn sample_report(findings: Vec<Finding>) -> CheckReport {
        let ok = findings.iter().all(|f| f.severity != Severity::Error);
        CheckReport {
            config_path: PathBuf::from("weft.config.json"),
            checked_patterns: 1,
            checked_stacks: 3,
            ok,
            findings,
        }
    }

    #[test]
    fn test_write_human_clean_report() {
        let mut buf = Vec::new();
        write_human(&sample_report(vec![]), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("WEFT CONFIGURATION CHECK"));
        assert!(text.contains("\u{2713} Configuration OK"));
    }

    #[test]
    fn test_write_human_failing_report_has_hints() {
        let findings = vec![Finding {
            file: PathBuf::from("weft.config.json"),
            json_path: "$.content[0]".to_owned(),
            value: "[broken".to_owned(),
            message: "invalid glob pattern: unterminated character class".to_owned(),
            severity: Severity::Error,
        }];
        let mut buf = Vec::new();
        write_human(&sample_report(findings), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\u{2717}"));
        assert!(text.contains("To fix:"));
        assert!(text.contains("Glob patterns"));
    }

    #[test]
    fn test_write_json_contract() {
        let mut buf = Vec::new();
        write_json(&sample_report(vec![]), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(json.get("config_path").is_some());
        assert!(json.get("checked_patterns").is_some());
        assert!(json.get("checked_stacks").is_some());
        assert!(json.get("ok").is_some());
        assert!(json.get("findings").is_some());
        assert!(json["ok"].as_bool().unwrap());
    }
}
