#![allow(clippy::unwrap_used)]
//! Integration tests for the `weft config` command internals.
//!
//! These tests cover:
//! - `init` scaffolding a default file
//! - `init` refusing to overwrite without `--force`
//! - `init` overwriting with `--force`
//! - A scaffolded file passing `check` cleanly
//! - A scaffolded file being loadable and equal to the defaults

use std::fs;

use tempfile::TempDir;
use weft_cli::commands::init::write_default_config;
use weft_config::{BuildConfig, CheckOptions};

fn sandbox() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    (tmp, root)
}

#[test]
fn test_init_writes_default_config() {
    let (_tmp, root) = sandbox();
    let path = root.join("weft.config.json");

    write_default_config(&path, false).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"./templates/**/*.html\""));
    assert!(written.contains("\"fontFamily\""));
    assert!(written.ends_with('\n'));
}

#[test]
fn test_init_refuses_existing_file() {
    let (_tmp, root) = sandbox();
    let path = root.join("weft.config.json");
    fs::write(&path, "{\"content\": [\"./src/**/*.html\"]}").unwrap();

    let err = write_default_config(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"), "got: {err}");

    // The existing file is untouched
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("./src/**/*.html"));
}

#[test]
fn test_init_force_overwrites() {
    let (_tmp, root) = sandbox();
    let path = root.join("weft.config.json");
    fs::write(&path, "{\"content\": [\"./src/**/*.html\"]}").unwrap();

    write_default_config(&path, true).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("./templates/**/*.html"));
}

#[test]
fn test_scaffolded_file_loads_as_defaults() {
    let (_tmp, root) = sandbox();
    let path = root.join("weft.config.json");
    write_default_config(&path, false).unwrap();

    let loaded = weft_config::load_config(&path).unwrap();
    assert_eq!(loaded, BuildConfig::default());
}

#[test]
fn test_scaffolded_file_checks_clean() {
    let (_tmp, root) = sandbox();
    // Give the default pattern something to match so no warning fires
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(root.join("templates/index.html"), "<html></html>").unwrap();

    let path = root.join("weft.config.json");
    write_default_config(&path, false).unwrap();

    let report = weft_config::check_file(&path, &CheckOptions::default()).unwrap();
    assert!(report.ok, "got findings: {:?}", report.findings);
    assert_eq!(report.findings.len(), 0);
}

#[test]
fn test_init_into_missing_directory_errors() {
    let (_tmp, root) = sandbox();
    let path = root.join("does-not-exist").join("weft.config.json");

    let result = write_default_config(&path, false);
    assert!(result.is_err());
}
