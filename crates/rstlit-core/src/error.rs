//! Error types for rstlit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rstlit operations
#[derive(Error, Debug)]
pub enum RstlitError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No comment string given and none known for the language
    #[error("No comment string known for language '{0}' (use --comment-string)")]
    UnknownLanguage(String),

    /// A literal block line is indented less than the first line of its block
    #[error(
        "Indentation error at line {line}: code block contains a line indented \
         {found} spaces, expected at least {expected}\n{block}"
    )]
    Indentation {
        /// Source line number (1-indexed) of the offending line
        line: usize,
        /// Indentation established by the first code line
        expected: usize,
        /// Indentation of the offending line
        found: usize,
        /// Text of the whole offending block
        block: String,
    },

    /// Output file exists and overwriting is disabled
    #[error("Output file exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Output file is newer than the input file
    #[error("Output file is newer than input file: {}", .0.display())]
    OutputNewer(PathBuf),

    /// No input file and nothing piped on stdin
    #[error("Missing input file name ('-' for stdin; -h for help)")]
    MissingInput,
}

/// Result type alias for rstlit operations
pub type Result<T> = std::result::Result<T, RstlitError>;
