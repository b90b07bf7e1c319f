//! Core enums for rstlit conversion state.
//!
//! Each converter direction runs its own small state machine. The states
//! are kept as separate enums so a match over one direction can never see
//! a state that only exists in the other.

use serde::{Deserialize, Serialize};

/// State of the text → code converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextState {
    /// First non-blank block, may carry a header marker
    #[default]
    Header,
    /// Prose paragraphs, emitted as comments
    Documentation,
    /// Inside an indented literal block
    Code,
}

impl std::fmt::Display for TextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextState::Header => write!(f, "header"),
            TextState::Documentation => write!(f, "documentation"),
            TextState::Code => write!(f, "code"),
        }
    }
}

/// State of the code → text converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CodeState {
    /// First non-blank block, leading code becomes a header block
    #[default]
    Header,
    /// Comment blocks, emitted as prose
    Documentation,
    /// Uncommented source, emitted as an indented literal block
    CodeBlock,
}

impl std::fmt::Display for CodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeState::Header => write!(f, "header"),
            CodeState::Documentation => write!(f, "documentation"),
            CodeState::CodeBlock => write!(f, "code_block"),
        }
    }
}

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// reStructuredText with literal blocks → commented source
    TextToCode,
    /// Commented source → reStructuredText with literal blocks
    CodeToText,
}

impl Direction {
    /// The opposite direction, used for round trips.
    pub fn reverse(self) -> Self {
        match self {
            Direction::TextToCode => Direction::CodeToText,
            Direction::CodeToText => Direction::TextToCode,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::TextToCode => write!(f, "txt2code"),
            Direction::CodeToText => write!(f, "code2txt"),
        }
    }
}

/// Kind of a repaired formatting inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// A blank line was inserted between text and a literal block
    MissingBlankLine,
    /// A `::` marker was not followed by a literal block
    DanglingLiteralMarker,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::MissingBlankLine => write!(f, "inserted missing blank line"),
            WarningKind::DanglingLiteralMarker => {
                write!(f, "literal block marker not followed by code")
            }
        }
    }
}
