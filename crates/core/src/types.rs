//! Domain types for representing the rendered guide document.

use serde::Serialize;

/// An RGB colour, written as six hex digits in Office XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Dark blue used for titles.
    pub const DARK_BLUE: Rgb = Rgb(0, 51, 102);
    /// Light blue used for subtitles and contact lines.
    pub const LIGHT_BLUE: Rgb = Rgb(0, 102, 204);
    /// Orange accent.
    pub const ACCENT: Rgb = Rgb(255, 140, 0);

    /// Uppercase hex form, e.g. `003366`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    /// Inherit from the paragraph style.
    #[default]
    Start,
    /// Centered.
    Center,
}

/// Character formatting of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Plain,
    Bold,
}

/// A contiguous run of text sharing one formatting attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Bold,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.emphasis == Emphasis::Bold
    }
}

/// A styled block of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading; level 0 is the document title, 1-4 are section levels.
    Heading {
        level: u8,
        text: String,
        color: Option<Rgb>,
        alignment: Alignment,
    },
    /// Bulleted list item.
    Bullet { text: String },
    /// Numbered list item.
    Numbered { text: String },
    /// Paragraph made of styled spans. An empty span list is an empty paragraph.
    Paragraph { spans: Vec<Span>, alignment: Alignment },
    /// Horizontal rule, rendered as a line of underscores.
    Rule,
    /// Hard page break.
    PageBreak,
}

impl Block {
    /// Create a left-aligned heading without a colour override.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
            color: None,
            alignment: Alignment::Start,
        }
    }

    /// Create a paragraph from spans.
    pub fn paragraph(spans: Vec<Span>) -> Self {
        Block::Paragraph {
            spans,
            alignment: Alignment::Start,
        }
    }

    /// Plain text of the block, used for outlines and logging.
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Bullet { text } | Block::Numbered { text } => {
                text.clone()
            }
            Block::Paragraph { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::Rule => RULE_TEXT.to_string(),
            Block::PageBreak => String::new(),
        }
    }
}

/// Text used to draw a horizontal rule.
pub const RULE_TEXT: &str = "__________________________________________________";

/// Page margins in twentieths of a point (1440 = 1 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Margins {
    /// Equal margins on every side, in inches.
    pub fn uniform_inches(inches: u32) -> Self {
        let twips = inches * 1440;
        Self {
            top: twips,
            bottom: twips,
            left: twips,
            right: twips,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform_inches(1)
    }
}

/// An output document: page setup plus an append-only list of blocks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    pub margins: Margins,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document with 1 inch margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append several blocks in order.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
