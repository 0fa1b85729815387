//! Filesystem configuration source.
//!
//! Resolves the well-known file name within a directory and reads it with a
//! bounded streaming read before handing the text to a format codec. The
//! read cap uses `Read::take` so the size check and the read are the same
//! operation — no TOCTOU window, no unbounded `read_to_string`.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{BuildConfig, WELL_KNOWN_NAMES};
use crate::error::LoadError;
use crate::format::{ConfigFormat, json, yaml};

/// Size cap for configuration files. A build configuration beyond 1 MiB is
/// malformed input, not a configuration.
pub const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Determine the configuration format from a file extension.
fn format_for(path: &Path) -> Option<ConfigFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(ConfigFormat::Json),
        Some("yaml" | "yml") => Some(ConfigFormat::Yaml),
        _ => None,
    }
}

/// Resolve the well-known configuration file within `dir`.
///
/// Probes the names in [`WELL_KNOWN_NAMES`] order and returns the first
/// existing regular file, so a JSON config shadows a YAML one.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when none of the well-known names exists.
pub fn resolve_config_path(dir: &Path) -> Result<PathBuf, LoadError> {
    for name in WELL_KNOWN_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "resolved configuration file");
            return Ok(candidate);
        }
    }
    Err(LoadError::NotFound {
        dir: dir.to_owned(),
        names: WELL_KNOWN_NAMES.join(", "),
    })
}

/// Load the configuration record from `path`, dispatching on the extension.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, exceeds
/// [`MAX_CONFIG_BYTES`], is not UTF-8, has an unrecognized extension, or
/// does not parse as the record shape.
pub fn load_config(path: &Path) -> Result<BuildConfig, LoadError> {
    let format = format_for(path).ok_or_else(|| LoadError::UnknownFormat {
        path: path.to_owned(),
    })?;
    let content = read_bounded(path)?;
    let config = match format {
        ConfigFormat::Json => json::config_from_json(&content, path)?,
        ConfigFormat::Yaml => yaml::config_from_yaml(&content, path)?,
    };
    tracing::debug!(
        path = %path.display(),
        patterns = config.content.len(),
        font_roles = config.theme.extend.font_family.len(),
        "loaded configuration"
    );
    Ok(config)
}

/// Read a configuration file enforcing [`MAX_CONFIG_BYTES`].
fn read_bounded(path: &Path) -> Result<String, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.to_owned(),
        source: e,
    })?;

    // Read at most MAX_CONFIG_BYTES + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(MAX_CONFIG_BYTES + 1)
        .read_to_end(&mut buffer)
        .map_err(|e| LoadError::Io {
            path: path.to_owned(),
            source: e,
        })?;

    if buffer.len() as u64 > MAX_CONFIG_BYTES {
        return Err(LoadError::TooLarge {
            path: path.to_owned(),
            limit: MAX_CONFIG_BYTES,
        });
    }

    String::from_utf8(buffer).map_err(|_| LoadError::InvalidEncoding {
        path: path.to_owned(),
    })
}
