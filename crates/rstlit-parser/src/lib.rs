//! rstlit Parser
//!
//! Bidirectional conversion between reStructuredText documentation with
//! literal code blocks and source code with documentation in comments.
//!
//! # Overview
//!
//! Both directions work on blocks: runs of lines ending with a blank line.
//! [`BlockCollector`] produces them, and a small state machine per
//! direction classifies and rewrites each one:
//!
//! - [`DocToCode`] - text → code, literal blocks become code
//! - [`CodeToDoc`] - code → text, comments become documentation
//!
//! # Example
//!
//! ```
//! use rstlit_config::ResolvedOptions;
//! use rstlit_parser::{code_to_text, text_to_code};
//!
//! let options = ResolvedOptions::default();
//! let text = "Set x::\n\n  x = 1\n";
//!
//! let code = text_to_code(text, &options).unwrap();
//! assert_eq!(code.output, "# Set x::\n\nx = 1\n");
//!
//! let back = code_to_text(&code.output, &options).unwrap();
//! assert_eq!(back.output, text);
//! ```

pub mod blocks;
pub mod code_to_doc;
pub mod doc_to_code;
pub mod marker;

pub use blocks::{split_lines, BlockCollector};
pub use code_to_doc::{block_is_text, CodeToDoc};
pub use doc_to_code::DocToCode;
pub use marker::{strip_literal_marker, CODE_MARKER_PARAGRAPH};

use log::debug;
use rstlit_config::ResolvedOptions;
use rstlit_core::{Direction, Result, Warning};

/// Result of a complete conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted text
    pub output: String,
    /// Formatting inconsistencies repaired on the way
    pub warnings: Vec<Warning>,
}

/// Convert reStructuredText to commented source code.
pub fn text_to_code(text: &str, options: &ResolvedOptions) -> Result<Conversion> {
    debug!("txt2code with comment string {:?}", options.comment_string);
    let (output, warnings) = DocToCode::new(split_lines(text), options).convert()?;
    Ok(Conversion { output, warnings })
}

/// Convert commented source code to reStructuredText.
pub fn code_to_text(code: &str, options: &ResolvedOptions) -> Result<Conversion> {
    debug!("code2txt with comment string {:?}", options.comment_string);
    let (output, warnings) = CodeToDoc::new(split_lines(code), options)?.convert();
    Ok(Conversion { output, warnings })
}

/// Convert `input` in the given direction.
pub fn convert(input: &str, direction: Direction, options: &ResolvedOptions) -> Result<Conversion> {
    match direction {
        Direction::TextToCode => text_to_code(input, options),
        Direction::CodeToText => code_to_text(input, options),
    }
}
