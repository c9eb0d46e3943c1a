//! Thin event writer over `quick_xml::Writer`.
//!
//! Element and attribute names are written as given (`w:p`, `a:rPr`, ...);
//! text and attribute values are escaped by quick-xml. Characters that
//! XML 1.0 does not allow are dropped before escaping.

use guide_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;

/// Streaming XML writer for one package part.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Create a writer and emit the standalone XML declaration.
    pub fn new() -> Result<Self> {
        let mut inner = Writer::new(Vec::with_capacity(4096));
        inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_error)?;
        Ok(Self { inner })
    }

    /// Write an opening tag.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = tag_with_attributes(name, attrs);
        self.inner.write_event(Event::Start(tag)).map_err(xml_error)
    }

    /// Write a self-closing tag.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = tag_with_attributes(name, attrs);
        self.inner.write_event(Event::Empty(tag)).map_err(xml_error)
    }

    /// Write a closing tag.
    pub fn end(&mut self, name: &str) -> Result<()> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.inner
            .write_event(Event::Text(BytesText::new(&strip_invalid_chars(text))))
            .map_err(xml_error)
    }

    /// Write `<name attrs>text</name>`.
    pub fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    /// Finish and return the serialized part.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

fn tag_with_attributes<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let values: Vec<Cow<str>> = attrs.iter().map(|(_, v)| strip_invalid_chars(v)).collect();
    BytesStart::new(name).with_attributes(
        attrs
            .iter()
            .zip(&values)
            .map(|((key, _), value)| (*key, value.as_ref())),
    )
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Remove characters XML 1.0 forbids, such as most C0 controls.
fn strip_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn xml_error(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(build: impl FnOnce(&mut XmlWriter) -> Result<()>) -> String {
        let mut writer = XmlWriter::new().unwrap();
        build(&mut writer).unwrap();
        String::from_utf8(writer.into_bytes()).unwrap()
    }

    #[test]
    fn test_declaration() {
        let xml = render(|_| Ok(()));
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(|w| w.text_element("a:t", &[], "Q&A <now>"));
        assert!(xml.ends_with("<a:t>Q&amp;A &lt;now&gt;</a:t>"));
    }

    #[test]
    fn test_attributes_are_escaped() {
        let xml = render(|w| w.empty("x", &[("title", "a \"b\" & c")]));
        assert!(xml.contains(r#"title="a &quot;b&quot; &amp; c""#));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let xml = render(|w| {
            w.empty("x", &[("v", "a\u{1}b")])?;
            w.text_element("t", &[], "Ctrl\u{B}K\tgo\u{FFFF}")
        });
        assert!(xml.contains(r#"<x v="ab"/>"#));
        assert!(xml.ends_with("<t>CtrlK\tgo</t>"));
    }

    #[test]
    fn test_strip_invalid_chars_borrows_clean_text() {
        assert!(matches!(strip_invalid_chars("plain é 📚"), Cow::Borrowed(_)));
        assert_eq!(strip_invalid_chars("\u{0}x\r\n"), "x\r\n");
    }

    #[test]
    fn test_nested_elements() {
        let xml = render(|w| {
            w.start("w:p", &[])?;
            w.start("w:pPr", &[])?;
            w.empty("w:pStyle", &[("w:val", "Heading1")])?;
            w.end("w:pPr")?;
            w.end("w:p")
        });
        assert!(xml.ends_with(r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr></w:p>"#));
    }
}
