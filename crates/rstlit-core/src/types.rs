//! Core types for rstlit

use crate::enums::WarningKind;
use crate::text::is_blank;
use serde::{Deserialize, Serialize};

/// A paragraph of input: every line up to and including the first blank
/// line, or the trailing lines of the input.
///
/// Lines keep their line terminators, so concatenating blocks in order
/// reproduces the text they were collected from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    /// Line number (1-indexed) of the first line
    pub start_line: usize,
    /// Lines including their terminators
    pub lines: Vec<String>,
}

impl Block {
    /// Create a block starting at `start_line`.
    pub fn new(start_line: usize, lines: Vec<String>) -> Self {
        Self { start_line, lines }
    }

    /// Create an empty block anchored at `start_line`.
    pub fn empty(start_line: usize) -> Self {
        Self::new(start_line, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when every line is blank (also for an empty block).
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| is_blank(line))
    }

    /// Index of the first non-blank line.
    pub fn first_content(&self) -> Option<usize> {
        self.lines.iter().position(|line| !is_blank(line))
    }

    /// Index of the last non-blank line.
    pub fn last_content(&self) -> Option<usize> {
        self.lines.iter().rposition(|line| !is_blank(line))
    }

    /// Source line number (1-indexed) of the line at `index`.
    pub fn line_number(&self, index: usize) -> usize {
        self.start_line + index
    }

    /// Split the block in two at `at`, returning the tail.
    pub fn split_off(&mut self, at: usize) -> Block {
        let tail = self.lines.split_off(at);
        Block::new(self.start_line + at, tail)
    }

    /// The block as one string.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// A formatting inconsistency that was repaired during conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Source line number (1-indexed) the repair refers to
    pub line: usize,
    /// What was repaired
    pub kind: WarningKind,
}

impl Warning {
    pub fn new(line: usize, kind: WarningKind) -> Self {
        Self { line, kind }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}
