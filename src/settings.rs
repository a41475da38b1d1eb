//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::converter::UnmappablePolicy;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before the first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub conversion: ConversionSettings,
    pub grouping: GroupingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub scrivener: bool,
    pub unmappable: UnmappablePolicy,
    pub boundary_marker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupingSettings {
    pub char_budget: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let marker = &s.conversion.boundary_marker;
    if marker.chars().count() != 2 {
        return Err(SettingsError::InvalidValue {
            field: "conversion.boundary_marker".to_string(),
            reason: "must be exactly two characters".to_string(),
        });
    }
    if marker.contains(' ') {
        return Err(SettingsError::InvalidValue {
            field: "conversion.boundary_marker".to_string(),
            reason: "must not contain a space".to_string(),
        });
    }
    if s.grouping.char_budget == 0 {
        return Err(SettingsError::InvalidValue {
            field: "grouping.char_budget".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(!s.conversion.scrivener);
        assert_eq!(s.conversion.unmappable, UnmappablePolicy::Skip);
        assert_eq!(s.conversion.boundary_marker, "==");
        assert_eq!(s.grouping.char_budget, 4);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[conversion]
scrivener = true
unmappable = "error"
boundary_marker = "||"

[grouping]
char_budget = 5
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.conversion.scrivener);
        assert_eq!(s.conversion.unmappable, UnmappablePolicy::Error);
        assert_eq!(s.conversion.boundary_marker, "||");
        assert_eq!(s.grouping.char_budget, 5);
    }

    #[test]
    fn error_marker_length() {
        let toml = r#"
[conversion]
scrivener = false
unmappable = "skip"
boundary_marker = "="

[grouping]
char_budget = 4
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("conversion.boundary_marker"));
    }

    #[test]
    fn error_marker_with_space() {
        let toml = r#"
[conversion]
scrivener = false
unmappable = "skip"
boundary_marker = "= "

[grouping]
char_budget = 4
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("space"));
    }

    #[test]
    fn error_zero_budget() {
        let toml = r#"
[conversion]
scrivener = false
unmappable = "skip"
boundary_marker = "=="

[grouping]
char_budget = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("grouping.char_budget"));
    }

    #[test]
    fn error_unknown_policy() {
        let toml = r#"
[conversion]
scrivener = false
unmappable = "panic"
boundary_marker = "=="

[grouping]
char_budget = 4
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[conversion]
scrivener = false
unmappable = "skip"
boundary_marker = "=="
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn default_toml_is_embedded() {
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
        assert_eq!(settings().grouping.char_budget, 4);
    }
}
