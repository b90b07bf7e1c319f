//! Line-level text helpers shared by both converter directions.
//!
//! All indentation arithmetic assumes tabs were already expanded with
//! [`expand_tabs`]; after that, indentation is a plain count of leading
//! spaces.

use std::borrow::Cow;

/// Tab stop width used when expanding tabs.
pub const TAB_SIZE: usize = 8;

/// The reStructuredText literal block marker.
pub const LITERAL_MARKER: &str = "::";

/// Expand horizontal tabs to spaces using tab stops every [`TAB_SIZE`]
/// columns. The column resets after a newline or carriage return.
///
/// # Example
///
/// ```
/// use rstlit_core::text::expand_tabs;
/// assert_eq!(expand_tabs("\tx = 1\n"), "        x = 1\n");
/// assert_eq!(expand_tabs("ab\tc"), "ab      c");
/// ```
pub fn expand_tabs(line: &str) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + TAB_SIZE);
    let mut column = 0;
    for c in line.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - (column % TAB_SIZE);
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// A line is blank when nothing but whitespace remains after stripping.
pub fn is_blank(line: &str) -> bool {
    line.trim_end().is_empty()
}

/// Number of leading spaces.
pub fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// The line terminator of `line` (`"\r\n"`, `"\n"`, or `""` for an
/// unterminated last line).
pub fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Prefix a non-blank line with `width` spaces. Blank lines are returned
/// unchanged so indenting never introduces trailing whitespace.
pub fn indent_line(line: &str, width: usize) -> String {
    if is_blank(line) {
        line.to_string()
    } else {
        format!("{}{}", " ".repeat(width), line)
    }
}

/// Remove up to `width` leading spaces. A line that consisted only of
/// those spaces collapses to its line ending.
///
/// # Example
///
/// ```
/// use rstlit_core::text::unindent_line;
/// assert_eq!(unindent_line("    x\n", 2), "  x\n");
/// assert_eq!(unindent_line(" \n", 2), "\n");
/// ```
pub fn unindent_line(line: &str, width: usize) -> String {
    let strip = indent_of(line).min(width);
    line[strip..].to_string()
}

/// Does the line end with the `::` literal block marker?
pub fn ends_with_literal_marker(line: &str) -> bool {
    line.trim_end().ends_with(LITERAL_MARKER)
}

/// Is the line an explicit markup line (directive or comment) such as
/// `.. note::`?
pub fn is_directive(line: &str, header_marker: &str) -> bool {
    !header_marker.is_empty() && line.trim_start().starts_with(header_marker)
}

/// A line that introduces a literal block: ends in `::` but is not a
/// directive.
pub fn is_literal_marker_line(line: &str, header_marker: &str) -> bool {
    ends_with_literal_marker(line) && !is_directive(line, header_marker)
}
