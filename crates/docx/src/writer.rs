//! DOCX package writer.

use crate::styles::{
    heading_style, numbering_xml, styles_xml, MAX_HEADING_LEVEL, STYLE_LIST_BULLET,
    STYLE_LIST_NUMBER,
};
use guide_core::types::RULE_TEXT;
use guide_core::{Alignment, Block, Document, Error, Margins, Result, Rgb, Span};
use guide_opc::constants::{content_type as ct, namespace, relationship_type as rt};
use guide_opc::{Package, Relationships, XmlWriter};
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";

/// US Letter page size in twips.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;

/// Writer for WordprocessingML packages.
#[derive(Debug, Clone)]
pub struct DocxWriter {
    title: String,
    creator: String,
}

impl DocxWriter {
    /// Create a writer with the default document properties.
    pub fn new() -> Self {
        Self {
            title: "RASS Academy User Guide".to_string(),
            creator: "RASS Academy".to_string(),
        }
    }

    /// Set the title stored in the core properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the creator stored in the core properties.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Assemble the package for a document.
    pub fn build_package(&self, document: &Document) -> Result<Package> {
        let mut package = Package::new();

        package.add_main_part(
            DOCUMENT_PART,
            ct::WML_DOCUMENT_MAIN,
            document_xml(document)?,
        );
        package.add_part(STYLES_PART, ct::WML_STYLES, styles_xml()?);
        package.add_part(NUMBERING_PART, ct::WML_NUMBERING, numbering_xml()?);

        let mut rels = Relationships::new();
        rels.add(rt::STYLES, "styles.xml");
        rels.add(rt::NUMBERING, "numbering.xml");
        package.add_relationships(DOCUMENT_PART, &rels)?;

        package.add_core_properties(&self.title, &self.creator)?;

        log::debug!("Built DOCX package with {} blocks", document.len());
        Ok(package)
    }

    /// Render a document to DOCX bytes.
    pub fn to_bytes(&self, document: &Document) -> Result<Vec<u8>> {
        self.build_package(document)?.to_bytes()
    }

    /// Render a document and write it to `path`.
    pub fn save(&self, document: &Document, path: impl AsRef<Path>) -> Result<()> {
        self.build_package(document)?.save(path)
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate `word/document.xml`.
pub fn document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "w:document",
        &[
            ("xmlns:w", namespace::WML_MAIN),
            ("xmlns:r", namespace::OFC_RELATIONSHIPS),
        ],
    )?;
    xml.start("w:body", &[])?;

    for block in &document.blocks {
        write_block(&mut xml, block)?;
    }

    write_section(&mut xml, &document.margins)?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.into_bytes())
}

fn write_block(xml: &mut XmlWriter, block: &Block) -> Result<()> {
    match block {
        Block::Heading {
            level,
            text,
            color,
            alignment,
        } => {
            if *level > MAX_HEADING_LEVEL {
                return Err(Error::InvalidContent(format!(
                    "Heading level must be 0-{}, got {}",
                    MAX_HEADING_LEVEL, level
                )));
            }
            xml.start("w:p", &[])?;
            write_paragraph_properties(xml, Some(heading_style(*level).as_str()), *alignment)?;
            if !text.is_empty() {
                write_run(xml, text, false, *color)?;
            }
            xml.end("w:p")
        }
        Block::Bullet { text } => write_styled_paragraph(xml, STYLE_LIST_BULLET, text),
        Block::Numbered { text } => write_styled_paragraph(xml, STYLE_LIST_NUMBER, text),
        Block::Paragraph { spans, alignment } => write_span_paragraph(xml, spans, *alignment),
        Block::Rule => write_span_paragraph(xml, &[Span::plain(RULE_TEXT)], Alignment::Start),
        Block::PageBreak => {
            xml.start("w:p", &[])?;
            xml.start("w:r", &[])?;
            xml.empty("w:br", &[("w:type", "page")])?;
            xml.end("w:r")?;
            xml.end("w:p")
        }
    }
}

fn write_styled_paragraph(xml: &mut XmlWriter, style: &str, text: &str) -> Result<()> {
    xml.start("w:p", &[])?;
    write_paragraph_properties(xml, Some(style), Alignment::Start)?;
    if !text.is_empty() {
        write_run(xml, text, false, None)?;
    }
    xml.end("w:p")
}

fn write_span_paragraph(xml: &mut XmlWriter, spans: &[Span], alignment: Alignment) -> Result<()> {
    xml.start("w:p", &[])?;
    write_paragraph_properties(xml, None, alignment)?;
    for span in spans {
        write_run(xml, &span.text, span.is_bold(), None)?;
    }
    xml.end("w:p")
}

fn write_paragraph_properties(
    xml: &mut XmlWriter,
    style: Option<&str>,
    alignment: Alignment,
) -> Result<()> {
    if style.is_none() && alignment == Alignment::Start {
        return Ok(());
    }
    xml.start("w:pPr", &[])?;
    if let Some(style) = style {
        xml.empty("w:pStyle", &[("w:val", style)])?;
    }
    if alignment == Alignment::Center {
        xml.empty("w:jc", &[("w:val", "center")])?;
    }
    xml.end("w:pPr")
}

/// Write one run. Line feeds inside the text become `w:br` elements.
fn write_run(xml: &mut XmlWriter, text: &str, bold: bool, color: Option<Rgb>) -> Result<()> {
    xml.start("w:r", &[])?;

    if bold || color.is_some() {
        xml.start("w:rPr", &[])?;
        if bold {
            xml.empty("w:b", &[])?;
        }
        if let Some(color) = color {
            xml.empty("w:color", &[("w:val", color.hex().as_str())])?;
        }
        xml.end("w:rPr")?;
    }

    for (idx, piece) in text.split('\n').enumerate() {
        if idx > 0 {
            xml.empty("w:br", &[])?;
        }
        if !piece.is_empty() {
            xml.text_element("w:t", &[("xml:space", "preserve")], piece)?;
        }
    }

    xml.end("w:r")
}

fn write_section(xml: &mut XmlWriter, margins: &Margins) -> Result<()> {
    xml.start("w:sectPr", &[])?;
    xml.empty(
        "w:pgSz",
        &[
            ("w:w", PAGE_WIDTH.to_string().as_str()),
            ("w:h", PAGE_HEIGHT.to_string().as_str()),
        ],
    )?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", margins.top.to_string().as_str()),
            ("w:right", margins.right.to_string().as_str()),
            ("w:bottom", margins.bottom.to_string().as_str()),
            ("w:left", margins.left.to_string().as_str()),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")
}
