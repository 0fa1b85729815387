//! YAML codec for the configuration record (parse only).

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::LoadError;

/// Parse a configuration record from YAML text.
///
/// # Errors
///
/// Returns [`LoadError::Yaml`] if the content is not valid YAML or does not
/// match the record shape. Multi-document streams are rejected — a build
/// configuration is a single document.
pub fn config_from_yaml(content: &str, path: &Path) -> Result<BuildConfig, LoadError> {
    serde_saphyr::from_str(content).map_err(|e| LoadError::Yaml {
        path: path.to_owned(),
        message: e.to_string(),
    })
}
