//! Literal block marker handling.

use rstlit_core::text::{is_blank, is_literal_marker_line, line_ending};

/// The standalone `::` paragraph inserted before a literal block whose
/// preceding text does not end with a marker.
pub const CODE_MARKER_PARAGRAPH: [&str; 2] = ["::\n", "\n"];

/// Remove the `::` marker that ends a text block, for output whose code
/// blocks are stripped.
///
/// Looks at the last two lines (marker line, then blank separator):
/// - `::` on its own is deleted together with the blank line before it
/// - `text ::` loses the marker and the whitespace before it
/// - `text::` becomes `text:`
///
/// Directive lines such as `.. note::` are left alone.
///
/// # Example
///
/// ```
/// use rstlit_parser::strip_literal_marker;
/// let mut lines = vec!["Example::\n".to_string(), "\n".to_string()];
/// strip_literal_marker(&mut lines, "..");
/// assert_eq!(lines, vec!["Example:\n", "\n"]);
/// ```
pub fn strip_literal_marker(lines: &mut Vec<String>, header_marker: &str) {
    let len = lines.len();
    if len < 2 || !is_blank(&lines[len - 1]) {
        return;
    }

    let index = len - 2;
    let line = &lines[index];
    if !is_literal_marker_line(line, header_marker) {
        return;
    }

    let stem = line.trim_end().trim_end_matches(':');
    let bare = stem.trim_end_matches(|c: char| c == ':' || c.is_whitespace());
    if bare.trim_start().is_empty() {
        lines.remove(index);
        if index > 0 && is_blank(&lines[index - 1]) {
            lines.remove(index - 1);
        }
        return;
    }

    let ending = line_ending(line);
    let replaced = if stem.ends_with(char::is_whitespace) {
        format!("{}{}", bare, ending)
    } else {
        format!("{}:{}", stem, ending)
    };
    lines[index] = replaced;
}
