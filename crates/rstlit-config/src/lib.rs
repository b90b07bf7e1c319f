//! rstlit Config
//!
//! This crate resolves converter options and handles configuration
//! loading for rstlit, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/rstlit/config.toml`
//! - macOS: `~/Library/Application Support/rstlit/config.toml`
//! - Windows: `%APPDATA%\rstlit\config.toml`
//!
//! The config file can add comment strings for languages the built-in
//! table does not know, and map extra file extensions to languages.
//!
//! # Example
//!
//! ```no_run
//! use rstlit_config::{Config, ConverterOptions};
//!
//! let config = Config::load().unwrap();
//! let options = ConverterOptions::from_config(&config)
//!     .resolve_with(&config)
//!     .unwrap();
//! ```

mod converter;
pub mod languages;
mod options;

pub use converter::{ConverterConfig, OverwriteMode};
pub use options::{ConverterOptions, ResolvedOptions};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use rstlit_core::{Result, RstlitError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[converter]
Language     = "python"
CodeIndent   = 2
HeaderString = ".."
Strip        = false
Overwrite    = "update"

# Comment strings for additional languages, e.g.
#   fortran = "! "
[languages]

# Code file extensions for additional languages, e.g.
#   ".f90" = "fortran"
[extensions]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Converter defaults
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Extra language → comment string entries
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Extra extension → language entries
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use rstlit_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[converter]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "rstlit")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| RstlitError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load the base configuration, then merge an override given either
    /// as a path to an existing file or as an inline TOML string.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rstlit_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[converter]\nCodeIndent = 4")).unwrap();
    /// assert_eq!(config.converter.code_indent, 4);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override that is either a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        if override_path.exists() {
            return Self::load_from(override_path);
        }
        toml::from_str(override_str)
            .map_err(|e| RstlitError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence; table entries are added to
    /// (or replace) the existing ones.
    ///
    /// # Example
    ///
    /// ```
    /// use rstlit_config::Config;
    ///
    /// let mut base = Config::default();
    /// let other: Config = toml::from_str(r#"
    ///     [converter]
    ///     Strip = true
    ///     [languages]
    ///     fortran = "! "
    /// "#).unwrap();
    ///
    /// base.merge(&other);
    /// assert!(base.converter.strip);
    /// assert_eq!(base.comment_string_for("fortran").as_deref(), Some("! "));
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.converter.merge(&other.converter);
        for (language, comment) in &other.languages {
            self.languages.insert(language.to_lowercase(), comment.clone());
        }
        for (extension, language) in &other.extensions {
            self.extensions.insert(extension.to_lowercase(), language.clone());
        }
    }

    /// Comment string for `language`: config table first, then the
    /// built-in table.
    pub fn comment_string_for(&self, language: &str) -> Option<String> {
        let language = languages::normalize_language(language);
        self.languages
            .iter()
            .find(|(name, _)| name.to_lowercase() == language)
            .map(|(_, comment)| comment.clone())
            .or_else(|| languages::comment_string(&language).map(str::to_string))
    }

    /// Language for a code file extension (with leading dot): config
    /// table first, then the built-in table.
    pub fn language_for_extension(&self, extension: &str) -> Option<String> {
        let extension = extension.to_lowercase();
        self.extensions
            .iter()
            .find(|(ext, _)| ext.to_lowercase() == extension)
            .map(|(_, language)| language.clone())
            .or_else(|| languages::language_for_extension(&extension).map(str::to_string))
    }

    /// Is `extension` a code extension known to this config?
    pub fn is_code_extension(&self, extension: &str) -> bool {
        self.language_for_extension(extension).is_some()
    }
}
