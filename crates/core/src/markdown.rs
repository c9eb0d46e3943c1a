//! Line-oriented markdown conversion.
//!
//! Each line is classified by its leading tokens alone. The only state
//! carried between lines is whether we are inside a `---` delimited front
//! matter block, threaded through the fold as a [`ScanState`].

use crate::emphasis::{has_bold, lex_bold, BOLD_DELIMITER};
use crate::types::{Block, Span};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a numbered-list marker and the whitespace after it.
static NUMBERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Front matter delimiter. Also the horizontal rule marker.
const FRONT_MATTER_DELIMITER: &str = "---";

/// Heading markers, most specific first.
const HEADING_MARKERS: [(&str, u8); 4] = [("####", 4), ("###", 3), ("##", 2), ("#", 1)];

/// Title lines already rendered on the cover page.
pub const DEFAULT_SUPPRESSED_PREFIXES: [&str; 2] = [
    "# 📚 RASS ACADEMY",
    "## Complete Learning Management System User Guide",
];

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Heading at level 1-4.
    Heading { level: u8, text: String },
    /// `- item` or `* item`.
    Bullet(String),
    /// `12. item`.
    Numbered(String),
    /// A ``` fence. Fences are not rendered.
    CodeFence,
    /// A bare `---`.
    Rule,
    /// Any other non-blank text, split into emphasis spans.
    Paragraph(Vec<Span>),
    /// Produces no output.
    Skip,
}

impl LineKind {
    /// Convert the classification into an output block, if it produces one.
    pub fn into_block(self) -> Option<Block> {
        match self {
            LineKind::Heading { level, text } => Some(Block::heading(level, text)),
            LineKind::Bullet(text) => Some(Block::Bullet { text }),
            LineKind::Numbered(text) => Some(Block::Numbered { text }),
            LineKind::Rule => Some(Block::Rule),
            LineKind::Paragraph(spans) => Some(Block::paragraph(spans)),
            LineKind::CodeFence | LineKind::Skip => None,
        }
    }
}

/// Scanner state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    InFrontMatter,
}

impl ScanState {
    /// State after seeing a `---` line.
    pub fn toggled(self) -> Self {
        match self {
            ScanState::Normal => ScanState::InFrontMatter,
            ScanState::InFrontMatter => ScanState::Normal,
        }
    }
}

/// Classify one line by its leading tokens, first match wins.
///
/// Headings are matched on the raw line; every other rule looks at the
/// trimmed line.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(kind) = classify_heading(line) {
        return kind;
    }

    let trimmed = line.trim();

    if let Some(text) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return LineKind::Bullet(text.to_string());
    }

    if let Some(marker) = NUMBERED_MARKER_REGEX.find(trimmed) {
        return LineKind::Numbered(trimmed[marker.end()..].to_string());
    }

    if trimmed.starts_with("```") {
        return LineKind::CodeFence;
    }

    if trimmed == FRONT_MATTER_DELIMITER {
        return LineKind::Rule;
    }

    if !trimmed.is_empty() && !line.starts_with(BOLD_DELIMITER) {
        let spans = if has_bold(line) {
            lex_bold(line)
        } else {
            vec![Span::plain(trimmed)]
        };
        return LineKind::Paragraph(spans);
    }

    LineKind::Skip
}

fn classify_heading(line: &str) -> Option<LineKind> {
    let (marker, level) = HEADING_MARKERS
        .iter()
        .copied()
        .find(|&(marker, _)| line.starts_with(marker))?;

    let text = line
        .replace(marker, "")
        .trim()
        .trim_start_matches('#')
        .trim()
        .to_string();

    // `#` on its own is dropped; deeper empty headings are kept.
    if text.is_empty() && level == 1 {
        return Some(LineKind::Skip);
    }

    Some(LineKind::Heading { level, text })
}

/// Options for [`MarkdownConverter`].
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Raw-line prefixes that are dropped unconditionally.
    pub suppressed_prefixes: Vec<String>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            suppressed_prefixes: DEFAULT_SUPPRESSED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl ConverterOptions {
    /// Replace the suppressed title prefixes.
    pub fn with_suppressed_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppressed_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Converts markdown text into document blocks.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    options: ConverterOptions,
}

impl MarkdownConverter {
    /// Create a converter with the default suppressed title lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options.
    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Advance the scanner by one line.
    ///
    /// Every `---` line toggles front matter, so a rule is never produced
    /// here even though [`classify_line`] knows how to classify one.
    pub fn step(&self, state: ScanState, line: &str) -> (ScanState, LineKind) {
        if line.trim() == FRONT_MATTER_DELIMITER {
            return (state.toggled(), LineKind::Skip);
        }
        if state == ScanState::InFrontMatter {
            return (state, LineKind::Skip);
        }
        if self.is_suppressed(line) {
            return (state, LineKind::Skip);
        }
        (state, classify_line(line))
    }

    /// Convert a whole markdown source into blocks, in input order.
    pub fn convert(&self, source: &str) -> Vec<Block> {
        let (state, blocks) = source.lines().enumerate().fold(
            (ScanState::Normal, Vec::new()),
            |(state, mut blocks), (idx, line)| {
                let (next, kind) = self.step(state, line);
                log::trace!("line {}: {:?}", idx + 1, kind);
                if let Some(block) = kind.into_block() {
                    blocks.push(block);
                }
                (next, blocks)
            },
        );

        if state == ScanState::InFrontMatter {
            log::debug!("Source ended inside a front matter block");
        }
        log::debug!("Converted markdown into {} blocks", blocks.len());

        blocks
    }

    fn is_suppressed(&self, line: &str) -> bool {
        self.options
            .suppressed_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> LineKind {
        LineKind::Heading {
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify_line("# Intro"), heading(1, "Intro"));
        assert_eq!(classify_line("## Getting Started"), heading(2, "Getting Started"));
        assert_eq!(classify_line("### Login"), heading(3, "Login"));
        assert_eq!(classify_line("#### Step one"), heading(4, "Step one"));
    }

    #[test]
    fn test_deeper_headings_collapse_to_level_four() {
        assert_eq!(classify_line("##### Deep"), heading(4, "Deep"));
        assert_eq!(classify_line("###### Deeper"), heading(4, "Deeper"));
    }

    #[test]
    fn test_heading_keeps_inner_single_hash() {
        assert_eq!(classify_line("## C# basics"), heading(2, "C# basics"));
    }

    #[test]
    fn test_empty_level_one_heading_is_dropped() {
        assert_eq!(classify_line("# "), LineKind::Skip);
        assert_eq!(classify_line("#"), LineKind::Skip);
    }

    #[test]
    fn test_indented_hash_is_not_a_heading() {
        assert_eq!(
            classify_line("  # not a heading"),
            LineKind::Paragraph(vec![Span::plain("# not a heading")])
        );
    }

    #[test]
    fn test_bullets() {
        assert_eq!(classify_line("- item text"), LineKind::Bullet("item text".into()));
        assert_eq!(classify_line("* item text"), LineKind::Bullet("item text".into()));
        assert_eq!(classify_line("   - nested"), LineKind::Bullet("nested".into()));
    }

    #[test]
    fn test_numbered() {
        assert_eq!(
            classify_line("3. Do the thing"),
            LineKind::Numbered("Do the thing".into())
        );
        assert_eq!(classify_line("12.Tight"), LineKind::Numbered("Tight".into()));
        assert_eq!(classify_line("  7.   spaced"), LineKind::Numbered("spaced".into()));
    }

    #[test]
    fn test_code_fence_and_rule() {
        assert_eq!(classify_line("```bash"), LineKind::CodeFence);
        assert_eq!(classify_line("  ```"), LineKind::CodeFence);
        assert_eq!(classify_line("---"), LineKind::Rule);
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            classify_line("  Plain text  "),
            LineKind::Paragraph(vec![Span::plain("Plain text")])
        );
        assert_eq!(
            classify_line("Hello **world** today"),
            LineKind::Paragraph(vec![
                Span::plain("Hello "),
                Span::bold("world"),
                Span::plain(" today"),
            ])
        );
    }

    #[test]
    fn test_lines_starting_with_bold_are_skipped() {
        assert_eq!(classify_line("**Note:** something"), LineKind::Skip);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(classify_line(""), LineKind::Skip);
        assert_eq!(classify_line("   \t"), LineKind::Skip);
    }

    #[test]
    fn test_front_matter_is_skipped() {
        let source = "---\ntitle: Guide\n---\n# Title\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(blocks, vec![Block::heading(1, "Title")]);
    }

    #[test]
    fn test_every_delimiter_toggles_front_matter() {
        let source = "# A\n---\nhidden\n---\nshown\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(
            blocks,
            vec![
                Block::heading(1, "A"),
                Block::paragraph(vec![Span::plain("shown")]),
            ]
        );
        assert!(!blocks.contains(&Block::Rule));
    }

    #[test]
    fn test_step_threads_state() {
        let converter = MarkdownConverter::new();
        let (state, kind) = converter.step(ScanState::Normal, " --- ");
        assert_eq!(state, ScanState::InFrontMatter);
        assert_eq!(kind, LineKind::Skip);

        let (state, kind) = converter.step(state, "# inside");
        assert_eq!(state, ScanState::InFrontMatter);
        assert_eq!(kind, LineKind::Skip);

        let (state, _) = converter.step(state, "---");
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_duplicate_titles_are_suppressed() {
        let source = "# 📚 RASS ACADEMY\n## Complete Learning Management System User Guide\n## Overview\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(blocks, vec![Block::heading(2, "Overview")]);
    }

    #[test]
    fn test_custom_suppressed_prefixes() {
        let options = ConverterOptions::default().with_suppressed_prefixes(["# Draft"]);
        let converter = MarkdownConverter::with_options(options);
        let blocks = converter.convert("# Draft title\n# 📚 RASS ACADEMY\n");
        assert_eq!(blocks, vec![Block::heading(1, "📚 RASS ACADEMY")]);
    }

    #[test]
    fn test_order_is_preserved_and_lists_are_not_merged() {
        let source = "## Steps\n1. One\n2. Two\n- a\n- b\n\nDone.\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(
            blocks,
            vec![
                Block::heading(2, "Steps"),
                Block::Numbered { text: "One".into() },
                Block::Numbered { text: "Two".into() },
                Block::Bullet { text: "a".into() },
                Block::Bullet { text: "b".into() },
                Block::paragraph(vec![Span::plain("Done.")]),
            ]
        );
    }

    #[test]
    fn test_code_bodies_fall_through_to_paragraphs() {
        let source = "```\nnpm install\n```\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(blocks, vec![Block::paragraph(vec![Span::plain("npm install")])]);
    }

    #[test]
    fn test_crlf_input() {
        let source = "---\r\nkey: value\r\n---\r\n## Heading\r\n- item\r\n";
        let blocks = MarkdownConverter::new().convert(source);
        assert_eq!(
            blocks,
            vec![
                Block::heading(2, "Heading"),
                Block::Bullet { text: "item".into() },
            ]
        );
    }
}
