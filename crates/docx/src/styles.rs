//! Paragraph styles and list numbering definitions.

use guide_core::Result;
use guide_opc::constants::namespace;
use guide_opc::XmlWriter;

pub const STYLE_TITLE: &str = "Title";
pub const STYLE_LIST_BULLET: &str = "ListBullet";
pub const STYLE_LIST_NUMBER: &str = "ListNumber";

/// Numbering instance used by `ListBullet`.
pub const BULLET_NUM_ID: u32 = 1;
/// Numbering instance used by `ListNumber`.
pub const DECIMAL_NUM_ID: u32 = 2;

/// Deepest heading level with a style.
pub const MAX_HEADING_LEVEL: u8 = 4;

/// Style id for a heading level; level 0 is the document title.
pub fn heading_style(level: u8) -> String {
    if level == 0 {
        STYLE_TITLE.to_string()
    } else {
        format!("Heading{}", level)
    }
}

/// A paragraph style definition.
struct StyleDef {
    id: &'static str,
    name: &'static str,
    /// Font size in half-points.
    size: Option<u32>,
    bold: bool,
    color: Option<&'static str>,
    outline_level: Option<u8>,
    num_id: Option<u32>,
    space_before: Option<u32>,
}

const fn heading(id: &'static str, name: &'static str, size: u32, color: &'static str, level: u8) -> StyleDef {
    StyleDef {
        id,
        name,
        size: Some(size),
        bold: true,
        color: Some(color),
        outline_level: Some(level),
        num_id: None,
        space_before: Some(240),
    }
}

const fn list(id: &'static str, name: &'static str, num_id: u32) -> StyleDef {
    StyleDef {
        id,
        name,
        size: None,
        bold: false,
        color: None,
        outline_level: None,
        num_id: Some(num_id),
        space_before: None,
    }
}

const PARAGRAPH_STYLES: [StyleDef; 7] = [
    StyleDef {
        id: STYLE_TITLE,
        name: "Title",
        size: Some(56),
        bold: false,
        color: Some("17365D"),
        outline_level: None,
        num_id: None,
        space_before: None,
    },
    heading("Heading1", "heading 1", 28, "365F91", 0),
    heading("Heading2", "heading 2", 26, "4F81BD", 1),
    heading("Heading3", "heading 3", 24, "4F81BD", 2),
    heading("Heading4", "heading 4", 22, "4F81BD", 3),
    list(STYLE_LIST_BULLET, "List Bullet", BULLET_NUM_ID),
    list(STYLE_LIST_NUMBER, "List Number", DECIMAL_NUM_ID),
];

/// Generate `word/styles.xml`.
pub fn styles_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:styles", &[("xmlns:w", namespace::WML_MAIN)])?;

    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", "Calibri"),
            ("w:hAnsi", "Calibri"),
            ("w:eastAsia", "Calibri"),
            ("w:cs", "Calibri"),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", "22")])?;
    xml.empty("w:szCs", &[("w:val", "22")])?;
    xml.empty("w:lang", &[("w:val", "en-US")])?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:after", "200"), ("w:line", "276"), ("w:lineRule", "auto")])?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;
    xml.end("w:docDefaults")?;

    xml.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    for style in &PARAGRAPH_STYLES {
        write_style(&mut xml, style)?;
    }

    xml.end("w:styles")?;
    Ok(xml.into_bytes())
}

fn write_style(xml: &mut XmlWriter, style: &StyleDef) -> Result<()> {
    xml.start("w:style", &[("w:type", "paragraph"), ("w:styleId", style.id)])?;
    xml.empty("w:name", &[("w:val", style.name)])?;
    xml.empty("w:basedOn", &[("w:val", "Normal")])?;
    xml.empty("w:next", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;

    xml.start("w:pPr", &[])?;
    if style.outline_level.is_some() {
        xml.empty("w:keepNext", &[])?;
        xml.empty("w:keepLines", &[])?;
    }
    if let Some(num_id) = style.num_id {
        xml.start("w:numPr", &[])?;
        xml.empty("w:numId", &[("w:val", num_id.to_string().as_str())])?;
        xml.end("w:numPr")?;
    }
    if let Some(before) = style.space_before {
        xml.empty("w:spacing", &[("w:before", before.to_string().as_str()), ("w:after", "0")])?;
    }
    if style.num_id.is_some() {
        xml.empty("w:contextualSpacing", &[])?;
    }
    if let Some(level) = style.outline_level {
        xml.empty("w:outlineLvl", &[("w:val", level.to_string().as_str())])?;
    }
    xml.end("w:pPr")?;

    xml.start("w:rPr", &[])?;
    if style.bold {
        xml.empty("w:b", &[])?;
        xml.empty("w:bCs", &[])?;
    }
    if let Some(color) = style.color {
        xml.empty("w:color", &[("w:val", color)])?;
    }
    if let Some(size) = style.size {
        let size = size.to_string();
        xml.empty("w:sz", &[("w:val", size.as_str())])?;
        xml.empty("w:szCs", &[("w:val", size.as_str())])?;
    }
    xml.end("w:rPr")?;

    xml.end("w:style")
}

/// Generate `word/numbering.xml` with one bullet and one decimal list.
pub fn numbering_xml() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("w:numbering", &[("xmlns:w", namespace::WML_MAIN)])?;

    write_abstract_num(&mut xml, 0, "bullet", "•")?;
    write_abstract_num(&mut xml, 1, "decimal", "%1.")?;

    for (num_id, abstract_id) in [(BULLET_NUM_ID, 0u32), (DECIMAL_NUM_ID, 1u32)] {
        xml.start("w:num", &[("w:numId", num_id.to_string().as_str())])?;
        xml.empty("w:abstractNumId", &[("w:val", abstract_id.to_string().as_str())])?;
        xml.end("w:num")?;
    }

    xml.end("w:numbering")?;
    Ok(xml.into_bytes())
}

fn write_abstract_num(xml: &mut XmlWriter, id: u32, format: &str, text: &str) -> Result<()> {
    xml.start("w:abstractNum", &[("w:abstractNumId", id.to_string().as_str())])?;
    xml.empty("w:multiLevelType", &[("w:val", "singleLevel")])?;
    xml.start("w:lvl", &[("w:ilvl", "0")])?;
    xml.empty("w:start", &[("w:val", "1")])?;
    xml.empty("w:numFmt", &[("w:val", format)])?;
    xml.empty("w:lvlText", &[("w:val", text)])?;
    xml.empty("w:lvlJc", &[("w:val", "left")])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "360"), ("w:hanging", "360")])?;
    xml.end("w:pPr")?;
    xml.end("w:lvl")?;
    xml.end("w:abstractNum")
}
