//! PPTX package writer.

use crate::templates::{
    LAYOUT_BLANK, LAYOUT_BLANK_XML, LAYOUT_TITLE_AND_CONTENT, LAYOUT_TITLE_AND_CONTENT_XML,
    SLIDE_MASTER, SLIDE_MASTER_XML, THEME, THEME_XML,
};
use guide_core::deck::{BodyLine, SlideTitle, TextBox};
use guide_core::{Deck, Result, Rgb, Slide};
use guide_opc::constants::{content_type as ct, namespace, relationship_type as rt};
use guide_opc::{Package, Relationships, XmlWriter};
use std::path::Path;

const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// First id in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Writer for PresentationML packages.
#[derive(Debug, Clone)]
pub struct PptxWriter {
    title: String,
    creator: String,
}

impl PptxWriter {
    /// Create a writer with the default document properties.
    pub fn new() -> Self {
        Self {
            title: "RASS Academy Overview".to_string(),
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

    /// Assemble the package for a deck.
    pub fn build_package(&self, deck: &Deck) -> Result<Package> {
        let mut package = Package::new();

        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        let slide_rel_ids: Vec<String> = (1..=deck.len())
            .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
            .collect();

        package.add_main_part(
            PRESENTATION_PART,
            ct::PML_PRESENTATION_MAIN,
            presentation_xml(deck, &slide_rel_ids)?,
        );
        package.add_relationships(PRESENTATION_PART, &pres_rels)?;

        package.add_part(SLIDE_MASTER, ct::PML_SLIDE_MASTER, SLIDE_MASTER_XML.as_bytes().to_vec());
        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        package.add_relationships(SLIDE_MASTER, &master_rels)?;

        for (layout, xml) in [
            (LAYOUT_TITLE_AND_CONTENT, LAYOUT_TITLE_AND_CONTENT_XML),
            (LAYOUT_BLANK, LAYOUT_BLANK_XML),
        ] {
            package.add_part(layout, ct::PML_SLIDE_LAYOUT, xml.as_bytes().to_vec());
            let mut layout_rels = Relationships::new();
            layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
            package.add_relationships(layout, &layout_rels)?;
        }

        package.add_part(THEME, ct::OFC_THEME, THEME_XML.as_bytes().to_vec());

        for (idx, slide) in deck.slides.iter().enumerate() {
            let part = format!("ppt/slides/slide{}.xml", idx + 1);
            package.add_part(&part, ct::PML_SLIDE, slide_xml(slide)?);

            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, layout_target(slide));
            package.add_relationships(&part, &slide_rels)?;

            log::trace!("Slide {}: {}", idx + 1, slide.heading());
        }

        package.add_core_properties(&self.title, &self.creator)?;

        log::debug!("Built PPTX package with {} slides", deck.len());
        Ok(package)
    }

    /// Render a deck to PPTX bytes.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        self.build_package(deck)?.to_bytes()
    }

    /// Render a deck and write it to `path`.
    pub fn save(&self, deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
        self.build_package(deck)?.save(path)
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout target relative to `ppt/slides/`.
fn layout_target(slide: &Slide) -> &'static str {
    match slide {
        Slide::Blank { .. } => "../slideLayouts/slideLayout2.xml",
        Slide::TitleAndContent { .. } => "../slideLayouts/slideLayout1.xml",
    }
}

/// Generate `ppt/presentation.xml`.
pub fn presentation_xml(deck: &Deck, slide_rel_ids: &[String]) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:presentation",
        &[
            ("xmlns:a", namespace::DML_MAIN),
            ("xmlns:r", namespace::OFC_RELATIONSHIPS),
            ("xmlns:p", namespace::PML_MAIN),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    if !slide_rel_ids.is_empty() {
        xml.start("p:sldIdLst", &[])?;
        for (idx, rel_id) in slide_rel_ids.iter().enumerate() {
            xml.empty(
                "p:sldId",
                &[
                    ("id", (FIRST_SLIDE_ID + idx).to_string().as_str()),
                    ("r:id", rel_id.as_str()),
                ],
            )?;
        }
        xml.end("p:sldIdLst")?;
    }

    xml.empty(
        "p:sldSz",
        &[
            ("cx", deck.width.to_string().as_str()),
            ("cy", deck.height.to_string().as_str()),
        ],
    )?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;

    xml.end("p:presentation")?;
    Ok(xml.into_bytes())
}

/// Generate one `ppt/slides/slideN.xml`.
pub fn slide_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:sld",
        &[
            ("xmlns:a", namespace::DML_MAIN),
            ("xmlns:r", namespace::OFC_RELATIONSHIPS),
            ("xmlns:p", namespace::PML_MAIN),
        ],
    )?;
    xml.start("p:cSld", &[])?;
    xml.start("p:spTree", &[])?;

    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.empty("p:grpSpPr", &[])?;

    match slide {
        Slide::Blank { boxes } => {
            for (idx, text_box) in boxes.iter().enumerate() {
                write_text_box(&mut xml, idx + 2, text_box)?;
            }
        }
        Slide::TitleAndContent { title, body } => {
            write_title(&mut xml, title)?;
            write_body(&mut xml, body)?;
        }
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    Ok(xml.into_bytes())
}

/// Run formatting for a single text run.
struct RunFormat {
    size: Option<u32>,
    bold: bool,
    color: Option<Rgb>,
}

fn write_run(xml: &mut XmlWriter, text: &str, format: &RunFormat) -> Result<()> {
    let size = format.size.map(|pt| (pt * 100).to_string());
    let mut attrs = vec![("lang", "en-US")];
    if let Some(size) = size.as_deref() {
        attrs.push(("sz", size));
    }
    if format.bold {
        attrs.push(("b", "1"));
    }
    attrs.push(("dirty", "0"));

    xml.start("a:r", &[])?;
    match format.color {
        Some(color) => {
            xml.start("a:rPr", &attrs)?;
            xml.start("a:solidFill", &[])?;
            xml.empty("a:srgbClr", &[("val", color.hex().as_str())])?;
            xml.end("a:solidFill")?;
            xml.end("a:rPr")?;
        }
        None => xml.empty("a:rPr", &attrs)?,
    }
    xml.text_element("a:t", &[], text)?;
    xml.end("a:r")
}

fn write_placeholder_start(
    xml: &mut XmlWriter,
    id: usize,
    name: &str,
    placeholder: &[(&str, &str)],
) -> Result<()> {
    xml.start("p:sp", &[])?;
    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.to_string().as_str()), ("name", name)])?;
    xml.start("p:cNvSpPr", &[])?;
    xml.empty("a:spLocks", &[("noGrp", "1")])?;
    xml.end("p:cNvSpPr")?;
    xml.start("p:nvPr", &[])?;
    xml.empty("p:ph", placeholder)?;
    xml.end("p:nvPr")?;
    xml.end("p:nvSpPr")?;
    xml.empty("p:spPr", &[])?;
    xml.start("p:txBody", &[])?;
    xml.empty("a:bodyPr", &[])?;
    xml.empty("a:lstStyle", &[])
}

fn write_placeholder_end(xml: &mut XmlWriter) -> Result<()> {
    xml.end("p:txBody")?;
    xml.end("p:sp")
}

fn write_title(xml: &mut XmlWriter, title: &SlideTitle) -> Result<()> {
    write_placeholder_start(xml, 2, "Title 1", &[("type", "title")])?;
    xml.start("a:p", &[])?;
    write_run(
        xml,
        title.text,
        &RunFormat {
            size: Some(title.size),
            bold: false,
            color: Some(title.color),
        },
    )?;
    xml.end("a:p")?;
    write_placeholder_end(xml)
}

fn write_body(xml: &mut XmlWriter, body: &[BodyLine]) -> Result<()> {
    write_placeholder_start(xml, 3, "Content Placeholder 2", &[("idx", "1")])?;
    for line in body {
        xml.start("a:p", &[])?;
        write_run(
            xml,
            line.text,
            &RunFormat {
                size: line.size,
                bold: line.bold,
                color: None,
            },
        )?;
        xml.end("a:p")?;
    }
    write_placeholder_end(xml)
}

fn write_text_box(xml: &mut XmlWriter, id: usize, text_box: &TextBox) -> Result<()> {
    xml.start("p:sp", &[])?;
    xml.start("p:nvSpPr", &[])?;
    xml.empty(
        "p:cNvPr",
        &[
            ("id", id.to_string().as_str()),
            ("name", format!("TextBox {}", id - 1).as_str()),
        ],
    )?;
    xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    xml.start("p:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty(
        "a:off",
        &[
            ("x", text_box.left.to_string().as_str()),
            ("y", text_box.top.to_string().as_str()),
        ],
    )?;
    xml.empty(
        "a:ext",
        &[
            ("cx", text_box.width.to_string().as_str()),
            ("cy", text_box.height.to_string().as_str()),
        ],
    )?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    xml.empty("a:noFill", &[])?;
    xml.end("p:spPr")?;

    xml.start("p:txBody", &[])?;
    xml.start("a:bodyPr", &[("wrap", "square"), ("rtlCol", "0")])?;
    xml.empty("a:spAutoFit", &[])?;
    xml.end("a:bodyPr")?;
    xml.empty("a:lstStyle", &[])?;
    xml.start("a:p", &[])?;
    xml.empty("a:pPr", &[("algn", "ctr")])?;
    write_run(
        xml,
        text_box.text,
        &RunFormat {
            size: Some(text_box.size),
            bold: text_box.bold,
            color: Some(text_box.color),
        },
    )?;
    xml.end("a:p")?;
    xml.end("p:txBody")?;

    xml.end("p:sp")
}
