//! Converter options.
//!
//! [`ConverterOptions`] is what the caller assembles from the command line
//! and config file; every field that can be derived is still optional.
//! [`ConverterOptions::resolve`] derives the rest once, before conversion
//! starts, and produces the immutable [`ResolvedOptions`] both converters
//! take.

use crate::languages::normalize_language;
use crate::Config;
use rstlit_core::{Result, RstlitError};

/// Options for one conversion, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Source language, selects the default comment string
    pub language: String,
    /// Explicit comment string, overrides the language table
    pub comment_string: Option<String>,
    /// Drop documentation (text → code) or code (code → text)
    pub strip: bool,
    /// Spaces used to indent code under documentation
    pub codeindent: usize,
    /// Token marking a leading code block in the text source
    pub header_string: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
            comment_string: None,
            strip: false,
            codeindent: 2,
            header_string: "..".to_string(),
        }
    }
}

impl ConverterOptions {
    /// Default options for `language`.
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Self::default()
        }
    }

    /// Options seeded from the `[converter]` section of a config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.converter.language.clone(),
            comment_string: None,
            strip: config.converter.strip,
            codeindent: config.converter.code_indent,
            header_string: config.converter.header_string.clone(),
        }
    }

    pub fn with_comment_string(mut self, comment_string: &str) -> Self {
        self.comment_string = Some(comment_string.to_string());
        self
    }

    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    pub fn with_codeindent(mut self, codeindent: usize) -> Self {
        self.codeindent = codeindent;
        self
    }

    pub fn with_header_string(mut self, header_string: &str) -> Self {
        self.header_string = header_string.to_string();
        self
    }

    /// Resolve against the built-in language table only.
    ///
    /// # Example
    ///
    /// ```
    /// use rstlit_config::ConverterOptions;
    /// let resolved = ConverterOptions::new("c++").resolve().unwrap();
    /// assert_eq!(resolved.comment_string, "// ");
    /// assert_eq!(resolved.stripped_comment, "//");
    /// ```
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        self.resolve_with(&Config::default())
    }

    /// Resolve the comment string: explicit value, then the config's
    /// `[languages]` table, then the built-in table.
    pub fn resolve_with(&self, config: &Config) -> Result<ResolvedOptions> {
        let language = normalize_language(&self.language);

        let comment_string = match &self.comment_string {
            Some(explicit) => explicit.clone(),
            None => config
                .comment_string_for(&language)
                .ok_or_else(|| RstlitError::UnknownLanguage(language.clone()))?,
        };

        let stripped_comment = comment_string.trim_end().to_string();
        if stripped_comment.is_empty() {
            return Err(RstlitError::Config(format!(
                "comment string {:?} is empty",
                comment_string
            )));
        }
        if self.header_string.trim().is_empty() {
            return Err(RstlitError::Config("header string is empty".into()));
        }

        Ok(ResolvedOptions {
            language,
            comment_string,
            stripped_comment,
            strip: self.strip,
            codeindent: self.codeindent,
            header_string: self.header_string.clone(),
        })
    }
}

/// Fully resolved, immutable options for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Canonical language name
    pub language: String,
    /// Comment string prefixing documentation lines, e.g. `"# "`
    pub comment_string: String,
    /// `comment_string` without trailing whitespace, e.g. `"#"`
    pub stripped_comment: String,
    /// Drop documentation (text → code) or code (code → text)
    pub strip: bool,
    /// Spaces used to indent code under documentation
    pub codeindent: usize,
    /// Token marking a leading code block in the text source
    pub header_string: String,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
            comment_string: "# ".to_string(),
            stripped_comment: "#".to_string(),
            strip: false,
            codeindent: 2,
            header_string: "..".to_string(),
        }
    }
}
