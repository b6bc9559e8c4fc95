// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use crate::controller::ValidationMode;
use crate::record::FormRecord;
use crate::sink::{DEFAULT_ALERT_INDENT, DEFAULT_ALERT_TITLE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub alert: AlertConfig,
}

/// Validation behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormSection {
    /// "onChange" (default), "onBlur" or "onSubmit"
    #[serde(default)]
    pub mode: ValidationMode,
}

/// Values the form starts with and returns to on reset
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,
}

impl DefaultsConfig {
    pub fn to_record(&self) -> FormRecord {
        FormRecord::new(
            self.name.as_str(),
            self.email.as_str(),
            self.password.as_str(),
            self.confirm_password.as_str(),
        )
    }
}

/// Success alert formatting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Spaces per JSON indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_title() -> String {
    DEFAULT_ALERT_TITLE.to_string()
}

fn default_indent() -> usize {
    DEFAULT_ALERT_INDENT
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            indent: default_indent(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form.mode, ValidationMode::OnChange);
        assert_eq!(config.defaults.to_record(), FormRecord::default());
        assert_eq!(config.alert.title, "Tada!");
        assert_eq!(config.alert.indent, 4);
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config: FormConfig = toml::from_str("[form]\n[defaults]\n[alert]\n").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_blank_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n\t").unwrap();

        let config = FormConfig::load(file.path()).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_custom_values() {
        let toml = r#"
            [form]
            mode = "onSubmit"

            [defaults]
            name = "ohh"

            [alert]
            title = "Welcome!"
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.form.mode, ValidationMode::OnSubmit);
        assert_eq!(config.defaults.name, "ohh");
        assert_eq!(config.defaults.email, "");
        assert_eq!(config.alert.title, "Welcome!");
        assert_eq!(config.alert.indent, 4);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let toml = r#"
            [form]
            mode = "onKeystroke"
        "#;
        assert!(toml::from_str::<FormConfig>(toml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FormConfig::load(dir.path().join("signup.toml")).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[form]\nmode = \"onBlur\"").unwrap();

        let config = FormConfig::load(file.path()).unwrap();
        assert_eq!(config.form.mode, ValidationMode::OnBlur);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[form\nmode = ").unwrap();

        let err = FormConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
