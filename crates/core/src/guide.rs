//! Assembly of the full user guide document.
//!
//! The rendered guide is a fixed cover page followed by the converted
//! markdown content.

use crate::markdown::MarkdownConverter;
use crate::types::{Alignment, Block, Document, Rgb, Span};

/// Title shown on the cover page.
pub const GUIDE_TITLE: &str = "RASS ACADEMY";

/// Cover page blocks, ending with a page break.
pub fn cover_page() -> Vec<Block> {
    vec![
        Block::Heading {
            level: 0,
            text: GUIDE_TITLE.to_string(),
            color: Some(Rgb::DARK_BLUE),
            alignment: Alignment::Center,
        },
        Block::Heading {
            level: 2,
            text: "Complete Learning Management System".to_string(),
            color: Some(Rgb::LIGHT_BLUE),
            alignment: Alignment::Center,
        },
        Block::Heading {
            level: 2,
            text: "User Guide & Documentation".to_string(),
            color: None,
            alignment: Alignment::Center,
        },
        Block::paragraph(Vec::new()),
        Block::paragraph(Vec::new()),
        Block::Paragraph {
            spans: vec![
                Span::bold("Version 1.0 | 2025\n"),
                Span::plain("Comprehensive Guide for Students, Instructors, and Administrators"),
            ],
            alignment: Alignment::Center,
        },
        Block::PageBreak,
    ]
}

/// Build the guide document from markdown source.
pub fn build_document(source: &str, converter: &MarkdownConverter) -> Document {
    let mut document = Document::new();
    document.extend(cover_page());
    document.extend(converter.convert(source));
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Margins;

    #[test]
    fn test_cover_page_ends_with_page_break() {
        let cover = cover_page();
        assert_eq!(cover.len(), 7);
        assert_eq!(cover.last(), Some(&Block::PageBreak));
        assert!(matches!(
            &cover[0],
            Block::Heading { level: 0, text, .. } if text == GUIDE_TITLE
        ));
    }

    #[test]
    fn test_converted_content_follows_cover() {
        let document = build_document("## Overview\n- item\n", &MarkdownConverter::new());
        let cover_len = cover_page().len();
        assert_eq!(document.len(), cover_len + 2);
        assert_eq!(document.blocks[cover_len], Block::heading(2, "Overview"));
        assert_eq!(
            document.blocks[cover_len + 1],
            Block::Bullet { text: "item".into() }
        );
    }

    #[test]
    fn test_one_inch_margins() {
        let document = build_document("", &MarkdownConverter::new());
        assert_eq!(document.margins, Margins::uniform_inches(1));
    }

    #[test]
    fn test_empty_source_still_has_cover() {
        let document = build_document("", &MarkdownConverter::new());
        assert_eq!(document.blocks, cover_page());
    }
}
