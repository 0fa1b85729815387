//! Error types for configuration loading and checking.

use std::path::PathBuf;

use serde::Serialize;

/// A configuration file that could not be loaded at all.
///
/// These are distinct from [`Finding`] (which describes a suspicious value
/// inside a successfully loaded record). A `LoadError` means there is no
/// record to check — callers must treat it as a hard failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// An I/O error occurred while reading the file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exceeded the configuration size cap.
    #[error("{} exceeds the {limit}-byte configuration size cap", path.display())]
    TooLarge { path: PathBuf, limit: u64 },
    /// The file content is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },
    /// The file content could not be parsed as JSON.
    #[error("JSON parse error in {}: {message}", path.display())]
    Json { path: PathBuf, message: String },
    /// The file content could not be parsed as YAML.
    #[error("YAML parse error in {}: {message}", path.display())]
    Yaml { path: PathBuf, message: String },
    /// The file has no recognized configuration extension.
    #[error("{} has no recognized configuration extension (expected .json, .yaml or .yml)", path.display())]
    UnknownFormat { path: PathBuf },
    /// No well-known configuration file exists in the directory.
    #[error("no configuration file found in {} (looked for {names})", dir.display())]
    NotFound { dir: PathBuf, names: String },
}

/// Severity of a single check finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The record loads and the generator would run, but a convention is
    /// violated (e.g. a fallback chain without a generic family tail).
    Warning,
    /// The record is structurally broken for the generator.
    Error,
}

/// A single structural problem found in a configuration record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Finding {
    /// Configuration file the record was loaded from.
    pub file: PathBuf,
    /// JSON path of the offending value (e.g. `$.theme.extend.fontFamily.serif`).
    pub json_path: String,
    /// The offending value as written; empty when absence is the problem.
    pub value: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Error findings fail the check; warnings do not (unless strict).
    pub severity: Severity,
}

impl Finding {
    /// Format the finding for human-readable output.
    ///
    /// With a value: `{file}: {severity}: {message} [{value}] (at {json_path})`
    /// Without: `{file}: {severity}: {message} (at {json_path})`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        if self.value.is_empty() {
            format!(
                "{}: {severity}: {} (at {})",
                self.file.display(),
                self.message,
                self.json_path
            )
        } else {
            format!(
                "{}: {severity}: {} [{}] (at {})",
                self.file.display(),
                self.message,
                self.value,
                self.json_path
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_finding_with_value() {
        let finding = Finding {
            file: PathBuf::from("weft.config.json"),
            json_path: "$.content[0]".to_owned(),
            value: "[broken".to_owned(),
            message: "invalid glob pattern".to_owned(),
            severity: Severity::Error,
        };

        let formatted = finding.format_human_readable();
        assert!(formatted.contains("weft.config.json"));
        assert!(formatted.contains("error:"));
        assert!(formatted.contains("[[broken]"));
        assert!(formatted.contains("(at $.content[0])"));
    }

    #[test]
    fn test_format_finding_without_value() {
        let finding = Finding {
            file: PathBuf::from("weft.config.json"),
            json_path: "$.content".to_owned(),
            value: String::new(),
            message: "content is empty".to_owned(),
            severity: Severity::Warning,
        };

        let formatted = finding.format_human_readable();
        assert!(formatted.contains("warning:"));
        assert!(formatted.contains("content is empty"));
        assert!(!formatted.contains("[]"));
        assert!(formatted.contains("(at $.content)"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }
}
