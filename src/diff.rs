//! Round-trip check.
//!
//! Converts the input, converts the result back, and reports the
//! differences as a unified diff.

use rstlit_config::ResolvedOptions;
use rstlit_core::{Direction, Result};
use rstlit_parser::convert;
use similar::TextDiff;

/// Convert `input` in `direction` and back again.
pub fn round_trip(input: &str, direction: Direction, options: &ResolvedOptions) -> Result<String> {
    let there = convert(input, direction, options)?;
    let back = convert(&there.output, direction.reverse(), options)?;
    Ok(back.output)
}

/// Unified diff of `original` against `result`, or `None` when they are
/// identical.
pub fn unified_diff(original: &str, result: &str, name: &str) -> Option<String> {
    if original == result {
        return None;
    }

    let diff = TextDiff::from_lines(original, result);
    let report = diff
        .unified_diff()
        .context_radius(3)
        .header(name, &format!("{} (round trip)", name))
        .to_string();
    Some(report)
}
