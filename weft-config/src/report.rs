//! Check report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Finding, Severity};

/// Result of a configuration check.
///
/// CI pipelines should gate on `ok`: warnings alone leave `ok` true unless
/// the check ran in strict mode (which promotes them to errors).
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Configuration file the record was loaded from.
    pub config_path: PathBuf,
    /// Number of content patterns inspected.
    pub checked_patterns: usize,
    /// Number of font fallback chains inspected.
    pub checked_stacks: usize,
    /// Whether the record is structurally sound (no error-severity findings).
    pub ok: bool,
    /// Individual findings, in record order.
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// Number of error-severity findings.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings.
    #[must_use]
    pub fn warnings_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }
}
