//! Inline `**bold**` lexing.
//!
//! Splits a line on `**` delimiters and alternates between plain and bold
//! spans. Delimiters are never matched up: with an odd number of them, the
//! last opened bold span simply runs to the end of the line.

use crate::types::{Emphasis, Span};

/// Bold delimiter.
pub const BOLD_DELIMITER: &str = "**";

/// Lex a line into plain and bold spans.
///
/// Segment parity decides emphasis: even segments are plain, odd segments
/// are bold. Empty segments produce no span.
pub fn lex_bold(line: &str) -> Vec<Span> {
    line.split(BOLD_DELIMITER)
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(idx, segment)| Span {
            text: segment.to_string(),
            emphasis: if idx % 2 == 0 {
                Emphasis::Plain
            } else {
                Emphasis::Bold
            },
        })
        .collect()
}

/// Whether the line carries any bold delimiter.
pub fn has_bold(line: &str) -> bool {
    line.contains(BOLD_DELIMITER)
}
