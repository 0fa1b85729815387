//! Format codecs for the configuration record.
//!
//! Each sub-module handles one on-disk format:
//! - `json` — `serde_json` parse and pretty emit (the canonical emit format)
//! - `yaml` — `serde-saphyr` parse (load-only; emitted configs are JSON)

pub mod json;
pub mod yaml;

/// On-disk configuration format, dispatched from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}
