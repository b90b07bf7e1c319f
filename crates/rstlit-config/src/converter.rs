//! Converter defaults configuration.
//!
//! This module contains the `ConverterConfig` struct which holds the
//! `[converter]` section of the config file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Policy for writing over an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteMode {
    /// Always overwrite
    Yes,
    /// Overwrite only if the output is older than the input
    #[default]
    Update,
    /// Never overwrite
    No,
}

impl FromStr for OverwriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(OverwriteMode::Yes),
            "update" => Ok(OverwriteMode::Update),
            "no" => Ok(OverwriteMode::No),
            other => Err(format!(
                "invalid overwrite mode '{}' (expected yes, update, or no)",
                other
            )),
        }
    }
}

impl std::fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverwriteMode::Yes => write!(f, "yes"),
            OverwriteMode::Update => write!(f, "update"),
            OverwriteMode::No => write!(f, "no"),
        }
    }
}

/// Converter defaults.
///
/// Command-line options take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConverterConfig {
    /// Language used when the file extension gives no hint.
    /// Default: "python"
    #[serde(default = "default_language")]
    pub language: String,

    /// Spaces used to indent code under documentation.
    /// Default: 2
    #[serde(default = "default_code_indent")]
    pub code_indent: usize,

    /// Token marking a leading code block in the text source.
    /// Default: ".."
    #[serde(default = "default_header_string")]
    pub header_string: String,

    /// Drop documentation (text → code) or code (code → text).
    /// Default: false
    #[serde(default)]
    pub strip: bool,

    /// Overwrite policy for output files.
    /// Default: update
    #[serde(default)]
    pub overwrite: OverwriteMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            code_indent: default_code_indent(),
            header_string: default_header_string(),
            strip: false,
            overwrite: OverwriteMode::Update,
        }
    }
}

impl ConverterConfig {
    /// Merge another ConverterConfig into this one.
    ///
    /// TOML cannot tell "not set" from "set to default", so every value
    /// is taken from `other`.
    pub fn merge(&mut self, other: &ConverterConfig) {
        self.language = other.language.clone();
        self.code_indent = other.code_indent;
        self.header_string = other.header_string.clone();
        self.strip = other.strip;
        self.overwrite = other.overwrite;
    }
}

fn default_language() -> String {
    "python".to_string()
}

fn default_code_indent() -> usize {
    2
}

fn default_header_string() -> String {
    "..".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let converter = ConverterConfig::default();
        assert_eq!(converter.language, "python");
        assert_eq!(converter.code_indent, 2);
        assert_eq!(converter.header_string, "..");
        assert!(!converter.strip);
        assert_eq!(converter.overwrite, OverwriteMode::Update);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Language = "c++"
            CodeIndent = 4
            HeaderString = ".. "
            Strip = true
            Overwrite = "no"
        "#;

        let converter: ConverterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(converter.language, "c++");
        assert_eq!(converter.code_indent, 4);
        assert_eq!(converter.header_string, ".. ");
        assert!(converter.strip);
        assert_eq!(converter.overwrite, OverwriteMode::No);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let converter: ConverterConfig = toml::from_str("Strip = true").unwrap();
        assert!(converter.strip);
        assert_eq!(converter.code_indent, 2);
    }

    #[test]
    fn test_overwrite_from_str() {
        assert_eq!("YES".parse::<OverwriteMode>(), Ok(OverwriteMode::Yes));
        assert_eq!("update".parse::<OverwriteMode>(), Ok(OverwriteMode::Update));
        assert!("sometimes".parse::<OverwriteMode>().is_err());
    }
}
