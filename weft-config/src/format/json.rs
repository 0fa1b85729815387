//! JSON codec for the configuration record.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::LoadError;

/// Parse a configuration record from JSON text.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if the content is not valid JSON or does not
/// match the record shape (including unknown fields — a misspelled key must
/// be reported, never silently ignored).
pub fn config_from_json(content: &str, path: &Path) -> Result<BuildConfig, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Json {
        path: path.to_owned(),
        message: e.to_string(),
    })
}

/// Emit a configuration record as pretty-printed JSON.
///
/// This is the canonical emit format: `print` and `init` both go through
/// here, so a scaffolded file round-trips byte-for-byte.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn config_to_json(config: &BuildConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(content: &str) -> Result<BuildConfig, LoadError> {
        config_from_json(content, Path::new("weft.config.json"))
    }

    #[test]
    fn test_parse_full_record() {
        let config = parse(
            r#"{
                "content": ["./templates/**/*.html"],
                "theme": {
                    "extend": {
                        "fontFamily": {
                            "serif": ["PT Serif", "serif"]
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.content, vec!["./templates/**/*.html".to_owned()]);
        assert_eq!(
            config.theme.extend.font_family["serif"],
            vec!["PT Serif".to_owned(), "serif".to_owned()]
        );
    }

    #[test]
    fn test_parse_theme_optional() {
        let config = parse(r#"{"content": ["./src/**/*.html"]}"#).unwrap();
        assert!(config.theme.extend.font_family.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        // "contents" is the classic typo; it must be a load error
        let result = parse(r#"{"contents": ["./templates/**/*.html"]}"#);
        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("unknown field"), "got: {err}");
    }

    #[test]
    fn test_parse_rejects_snake_case_font_family() {
        // The external key is camelCase; snake_case must not slip through
        let result = parse(
            r#"{"content": ["a"], "theme": {"extend": {"font_family": {}}}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_preserves_content_verbatim() {
        let config = BuildConfig::default();
        let json = config_to_json(&config).unwrap();
        let reloaded = parse(&json).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.content[0], "./templates/**/*.html");
    }

    #[test]
    fn test_roundtrip_preserves_chain_order() {
        let json = config_to_json(&BuildConfig::default()).unwrap();
        let reloaded = parse(&json).unwrap();
        assert_eq!(
            reloaded.theme.extend.font_family["serif"],
            vec!["PT Serif".to_owned(), "serif".to_owned()]
        );
    }

    #[test]
    fn test_emit_uses_camel_case_key() {
        let json = config_to_json(&BuildConfig::default()).unwrap();
        assert!(json.contains("\"fontFamily\""));
        assert!(!json.contains("font_family"));
    }
}
